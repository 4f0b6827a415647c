//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Rendering is split into pure `String` builders so tests can cover the output
//! without capturing stdout.

use deprecations_core::registry::Stage;
use deprecations_core::warnings::{self, WARNINGS, WarningId, WarningInfo};
use serde_json::json;
use tracing::debug;

use super::{CliError, CliResult, ExitCode, OutputFormat};

// ============================================================================
// Commands
// ============================================================================

/// Enumerate the catalog in the requested format.
pub fn list_warnings(format: OutputFormat) -> CliResult<ExitCode> {
    debug!(total = WARNINGS.len(), ?format, "rendering deprecation catalog");

    let rendered = match format {
        OutputFormat::Table => render_table(),
        OutputFormat::Json => render_json()?,
    };
    println!("{rendered}");
    Ok(ExitCode::SUCCESS)
}

/// Print the metadata and message for a single key.
///
/// Unknown keys are an error here: the caller explicitly named a key, so a miss
/// means a typo or a key from a different namespace.
pub fn show_warning(key: &str) -> CliResult<ExitCode> {
    let id = WarningId::try_from(key).map_err(|e| CliError::failure(e.to_string()))?;
    println!("{}", render_entry(warnings::info_for(id)));
    Ok(ExitCode::SUCCESS)
}

/// Validate keys against the catalog, one verdict per line.
///
/// Exits zero only when every key is known, so the command composes with shell
/// pipelines that lint old configurations.
pub fn check_keys(keys: &[String]) -> CliResult<ExitCode> {
    let mut unknown = 0usize;
    for key in keys {
        if warnings::valid(key) {
            println!("ok      {key}");
        } else {
            println!("unknown {key}");
            unknown += 1;
        }
    }

    if unknown > 0 {
        return Err(CliError::failure(format!(
            "{unknown} of {} key(s) not in the deprecation catalog",
            keys.len()
        )));
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Rendering
// ============================================================================

/// Human-oriented column layout, messages elided (use `show` for those).
fn render_table() -> String {
    let id_width = WARNINGS
        .iter()
        .map(|w| format!("{:?}", w.id).len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let key_width = WARNINGS
        .iter()
        .map(|w| w.key.len())
        .max()
        .unwrap_or(0)
        .max("KEY".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<id_width$}  {:<key_width$}  {:<5}  {:<7}  STAGE\n",
        "ID", "KEY", "SINCE", "REMOVAL",
    ));
    for w in WARNINGS {
        out.push_str(&format!(
            "{:<id_width$}  {:<key_width$}  {:<5}  {:<7}  {}\n",
            format!("{:?}", w.id),
            w.key,
            w.since,
            w.removed_in,
            stage_label(w.stage),
        ));
    }
    out.pop();
    out
}

/// JSON rendering of the full catalog, messages included.
fn render_json() -> CliResult<String> {
    let entries: Vec<serde_json::Value> = WARNINGS
        .iter()
        .map(|w| {
            json!({
                "id": format!("{:?}", w.id),
                // WarningId serializes as the full key string
                "key": w.id,
                "since": w.since,
                "removed_in": w.removed_in,
                "stage": stage_label(w.stage),
                "message": w.message,
            })
        })
        .collect();

    serde_json::to_string_pretty(&entries)
        .map_err(|e| CliError::failure(format!("Failed to render catalog as JSON: {e}")))
}

/// Single-entry layout for `show`.
fn render_entry(info: &WarningInfo) -> String {
    format!(
        "Id:      {:?}\nKey:     {}\nSince:   {}\nRemoval: {} ({})\n\n{}",
        info.id,
        info.key,
        info.since,
        info.removed_in,
        stage_label(info.stage),
        info.message,
    )
}

fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Deprecated => "deprecated",
        Stage::Removed => "removed",
    }
}
