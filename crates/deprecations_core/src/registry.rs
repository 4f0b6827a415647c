//! Shareable metadata for the deprecation catalog.
//!
//! The catalog in [`crate::warnings`] is a **registry-first** vocabulary: a stable id
//! enum plus a `const` metadata table. This submodule provides the small metadata types
//! reused by the table and by tooling (CLI, docs generation).
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so the catalog can
//!   live in a `const` table.
//! - Metadata here is for tooling and documentation; whether a deprecated feature is
//!   still reachable at runtime is decided by the surrounding system, not by this crate.

/// Identify the runtime release a catalog entry refers to.
///
/// ## Notes
/// - This is a free-form release string without the `v` prefix (e.g. `"1.7"`, `"2.0"`),
///   matching how releases are spelled in the user-facing messages.
///
/// ## Examples
/// ```rust
/// use deprecations_core::registry::ReleaseVersion;
///
/// let since: ReleaseVersion = "1.7";
/// assert!(!since.is_empty());
/// ```
pub type ReleaseVersion = &'static str;

/// Describe the lifecycle stage of a deprecated feature.
///
/// ## Notes
/// - `Deprecated` entries still ship in current releases; the recorded removal release
///   is a plan, not a fact.
/// - `Removed` entries are already gone as of the recorded removal release; their
///   warnings only fire for configs written against older runtimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Deprecated,
    Removed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_debug_names_are_stable() {
        // Rendered into docs and CLI tables via `{:?}`.
        assert_eq!(format!("{:?}", Stage::Deprecated), "Deprecated");
        assert_eq!(format!("{:?}", Stage::Removed), "Removed");
    }
}
