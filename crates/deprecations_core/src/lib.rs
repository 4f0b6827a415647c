//! Provide the canonical deprecation warning vocabulary for containerd-based runtimes.
//!
//! This crate is intentionally small and dependency-light. It is the single source of
//! truth for deprecation warning keys and their user-facing messages, so that:
//! - configuration loaders can check whether a key coming from an old config is a known
//!   deprecation, and
//! - tooling (CLI, docs generation) can enumerate and render the catalog without
//!   hard-coding key strings.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global mutable state. The catalog
//!   is a `const` table with the lifetime of the process; concurrent reads need no
//!   locking.
//! - Callers work with the stable [`warnings::WarningId`] enum and look up key strings
//!   and messages through the registry accessors, instead of scattering stringly-typed
//!   checks across the codebase.
//! - Unknown keys are a normal, non-exceptional outcome: the soft lookups return
//!   `Option`/`bool`. Only the strict conversions (`TryFrom`) produce an error.
//!
//! ## Examples
//! ```rust
//! use deprecations_core::warnings;
//!
//! assert!(warnings::valid("io.containerd.deprecation/aufs-snapshotter"));
//! assert_eq!(warnings::message("not-a-known-key"), None);
//! ```

pub mod errors;
pub mod registry;
pub mod warnings;

pub use errors::UnknownWarningKey;
pub use registry::{ReleaseVersion, Stage};
pub use warnings::{PREFIX, WARNINGS, WarningId, WarningInfo};
