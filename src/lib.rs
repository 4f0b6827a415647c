#![forbid(unsafe_code)]
//! Deprecation catalog query tooling for containerd-based runtimes
//!
//! The catalog itself lives in [`deprecations_core`]: a pure vocabulary crate mapping
//! namespaced warning keys (`io.containerd.deprecation/...`) to user-facing messages.
//! This crate provides the `deprecations` command-line interface around it: listing
//! the catalog, showing a single warning, and validating keys pulled from old
//! configurations.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (a catalog entry missing for a declared id), use
//!   `.expect("reason")` with a clear explanation; the guardrail tests keep those paths unreachable.

pub mod cli;
