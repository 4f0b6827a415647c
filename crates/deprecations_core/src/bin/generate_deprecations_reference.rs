//! Generate Markdown reference docs from the deprecation catalog.
//!
//! This binary renders the warning registry into a human-readable Markdown page under
//! `docs/reference/`.
//!
//! ## Notes
//! - The generated file is meant to be checked into the repo and treated as a derived
//!   artifact.
//! - Do not edit the generated Markdown by hand; update the registry instead.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p deprecations_core --bin generate_deprecations_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::{Path, PathBuf};

use deprecations_core::warnings::WARNINGS;

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    write_deprecations_reference(&out_dir.join("deprecations.md"));
}

/// Write `docs/reference/deprecations.md`.
///
/// A single consolidated reference document generated from the warning registry.
fn write_deprecations_reference(path: &Path) {
    let mut out = String::new();
    out.push_str("# Deprecation warning reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    If it looks wrong/outdated, regenerate it from source and commit the result.\n");
    out.push('\n');
    out.push_str(
        "    Regenerate with: `cargo run -p deprecations_core --bin generate_deprecations_reference`\n\n",
    );

    render_catalog_section(&mut out);
    render_messages_section(&mut out);

    while out.ends_with("\n\n") {
        out.pop();
    }
    fs::write(path, out).expect("write deprecations.md");
}

fn render_catalog_section(out: &mut String) {
    out.push_str("## Catalog\n\n");

    out.push_str("| Id | Key | Since | Removal | Stage |\n");
    out.push_str("|----|---|---|---|---|\n");

    for w in WARNINGS {
        let id = format!("{:?}", w.id);
        let key = format!("`{}`", w.key);
        let stage = format!("{:?}", w.stage);

        out.push_str(&format!(
            "| {id} | {key} | {since} | {removed_in} | {stage} |\n",
            since = w.since,
            removed_in = w.removed_in,
        ));
    }
    out.push('\n');
}

fn render_messages_section(out: &mut String) {
    out.push_str("## Messages\n\n");

    for w in WARNINGS {
        out.push_str(&format!("### `{}`\n\n", w.key));
        out.push_str(w.message);
        out.push_str("\n\n");
    }
}

fn workspace_root() -> PathBuf {
    // crates/deprecations_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/deprecations_core)")
}
