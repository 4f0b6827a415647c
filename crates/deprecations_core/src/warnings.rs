//! Define the deprecation warning vocabulary.
//!
//! This module is the single source of truth for deprecation warnings: a stable
//! identifier ([`WarningId`]) plus a const metadata table ([`WARNINGS`]) that records
//! the full key string, the user-facing message, and lifecycle metadata for every
//! warning.
//!
//! ## Notes
//! - Key lookup via [`from_key`] is **case-sensitive** and matches the full key,
//!   prefix included. External consumers match on the literal key strings, so the
//!   spellings in the table are load-bearing and must not drift.
//! - All keys share the [`PREFIX`] namespace, which is what distinguishes deprecation
//!   keys from unrelated configuration keys (and is used by the surrounding system to
//!   filter plugin exports).
//! - This registry is intentionally **pure**: no IO, no side effects, no mutation
//!   after compile time.
//!
//! ## Examples
//! ```rust
//! use deprecations_core::warnings::{self, WarningId};
//!
//! assert_eq!(
//!     warnings::from_key("io.containerd.deprecation/aufs-snapshotter"),
//!     Some(WarningId::AUFSSnapshotter)
//! );
//! assert_eq!(
//!     warnings::key(WarningId::AUFSSnapshotter),
//!     "io.containerd.deprecation/aufs-snapshotter"
//! );
//! ```

use std::fmt;

use crate::errors::UnknownWarningKey;
use crate::registry::{ReleaseVersion, Stage};

/// Common namespace for every deprecation warning key.
///
/// ## Notes
/// - Keys outside this namespace never belong to the catalog; [`valid`] returns
///   `false` for them without special-casing.
pub const PREFIX: &str = "io.containerd.deprecation/";

/// Stable identifier for every deprecation warning.
///
/// ## Notes
/// - The full key string is accessible via [`key`].
/// - Variant names are part of the public contract; they mirror the feature being
///   deprecated, not the release that deprecated it.
///
/// ## Examples
/// ```rust
/// use deprecations_core::warnings::{self, WarningId};
///
/// assert_eq!(
///     warnings::from_key("io.containerd.deprecation/runtime-v1"),
///     Some(WarningId::RuntimeV1)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningId {
    // Image handling
    PullSchema1Image,

    // Plugin mechanisms
    GoPluginLibrary,

    // CRI configuration surface
    CRISystemdCgroupV1,
    CRIRegistryMirrors,
    CRIRegistryAuths,
    CRIRegistryConfigs,
    CRIAPIV1Alpha2,

    // Snapshotters
    AUFSSnapshotter,

    // Runtimes
    RuntimeV1,
    RuntimeRuncV1,
}

/// Metadata for a deprecation warning.
///
/// ## Notes
/// - `key` is the full key string, prefix included.
/// - `message` is the user-facing description, reproduced verbatim wherever the
///   warning surfaces (logs, CLI, docs). Messages may contain backtick-quoted
///   config-key references.
/// - `since` and `removed_in` record the runtime releases that deprecated and
///   remove(d) the feature; `stage` says whether the removal already happened.
#[derive(Debug, Clone, Copy)]
pub struct WarningInfo {
    pub id: WarningId,
    pub key: &'static str,
    pub message: &'static str,
    pub since: ReleaseVersion,
    pub removed_in: ReleaseVersion,
    pub stage: Stage,
}

/// Registry of all deprecation warnings.
///
/// ## Notes
/// - Exactly one entry per [`WarningId`] variant; the guardrail tests enforce this
///   in both directions.
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const WARNINGS: &[WarningInfo] = &[
    // Image handling
    entry(
        WarningId::PullSchema1Image,
        "io.containerd.deprecation/pull-schema-1-image",
        concat!(
            "Schema 1 images are deprecated since containerd v1.7 and removed in containerd v2.0. ",
            "Since containerd v1.7.8, schema 1 images are identified by the \"io.containerd.image/converted-docker-schema1\" label.",
        ),
        "1.7",
        "2.0",
        Stage::Removed,
    ),
    // Plugin mechanisms
    entry(
        WarningId::GoPluginLibrary,
        "io.containerd.deprecation/go-plugin-library",
        "Dynamically-linked Go plugins as containerd runtimes will be deprecated in containerd v2.0 and removed in containerd v2.1.",
        "2.0",
        "2.1",
        Stage::Deprecated,
    ),
    // CRI configuration surface
    entry(
        WarningId::CRISystemdCgroupV1,
        "io.containerd.deprecation/cri-systemd-cgroup-v1",
        concat!(
            "The `systemd_cgroup` property (old form) of `[plugins.\"io.containerd.grpc.v1.cri\"] is deprecated since containerd v1.3 and will be removed in containerd v2.0. ",
            "Use `SystemdCgroup` in [plugins.\"io.containerd.grpc.v1.cri\".containerd.runtimes.runc.options] options instead.",
        ),
        "1.3",
        "2.0",
        Stage::Deprecated,
    ),
    entry(
        WarningId::CRIRegistryMirrors,
        "io.containerd.deprecation/cri-registry-mirrors",
        concat!(
            "The `mirrors` property of `[plugins.\"io.containerd.grpc.v1.cri\".registry]` is deprecated since containerd v1.5 and will be removed in containerd v2.0.",
            "Use `config_path` instead.",
        ),
        "1.5",
        "2.0",
        Stage::Deprecated,
    ),
    entry(
        WarningId::CRIRegistryAuths,
        "io.containerd.deprecation/cri-registry-auths",
        concat!(
            "The `auths` property of `[plugins.\"io.containerd.grpc.v1.cri\".registry]` is deprecated since containerd v1.3 and will be removed in containerd v2.0.",
            "Use `ImagePullSecrets` instead.",
        ),
        "1.3",
        "2.0",
        Stage::Deprecated,
    ),
    entry(
        WarningId::CRIRegistryConfigs,
        "io.containerd.deprecation/cri-registry-configs",
        concat!(
            "The `configs` property of `[plugins.\"io.containerd.grpc.v1.cri\".registry]` is deprecated since containerd v1.5 and will be removed in containerd v2.0.",
            "Use `config_path` instead.",
        ),
        "1.5",
        "2.0",
        Stage::Deprecated,
    ),
    entry(
        WarningId::CRIAPIV1Alpha2,
        "io.containerd.deprecation/cri-api-v1alpha2",
        "CRI API v1alpha2 is deprecated since containerd v1.7 and removed in containerd v2.0. Use CRI API v1 instead.",
        "1.7",
        "2.0",
        Stage::Removed,
    ),
    // Snapshotters
    entry(
        WarningId::AUFSSnapshotter,
        "io.containerd.deprecation/aufs-snapshotter",
        "The aufs snapshotter is deprecated since containerd v1.5 and removed in containerd v2.0. Use the overlay snapshotter instead.",
        "1.5",
        "2.0",
        Stage::Removed,
    ),
    // Runtimes
    entry(
        WarningId::RuntimeV1,
        "io.containerd.deprecation/runtime-v1",
        "The `io.containerd.runtime.v1.linux` runtime is deprecated since containerd v1.4 and removed in containerd v2.0. Use the `io.containerd.runc.v2` runtime instead.",
        "1.4",
        "2.0",
        Stage::Removed,
    ),
    entry(
        WarningId::RuntimeRuncV1,
        "io.containerd.deprecation/runtime-runc-v1",
        "The `io.containerd.runc.v1` runtime is deprecated since containerd v1.4 and removed in containerd v2.0. Use the `io.containerd.runc.v2` runtime instead.",
        "1.4",
        "2.0",
        Stage::Removed,
    ),
];

/// Check whether a key names a registered deprecation warning.
///
/// ## Parameters
/// - `key`: Candidate key (any string; unknown keys are a normal miss, not an error).
///
/// ## Returns
/// - `true` if the key has a catalog entry, `false` otherwise.
pub fn valid(key: &str) -> bool {
    from_key(key).is_some()
}

/// Look up the user-facing message for a key.
///
/// ## Parameters
/// - `key`: Candidate key.
///
/// ## Returns
/// - `Some(message)` if the key has a catalog entry.
/// - `None` otherwise; callers degrade gracefully (skip emitting a warning) rather
///   than fail.
pub fn message(key: &str) -> Option<&'static str> {
    WARNINGS.iter().find(|w| w.key == key).map(|w| w.message)
}

/// Resolve a key string to its stable id.
///
/// ## Parameters
/// - `key`: Candidate key (full string, prefix included).
///
/// ## Returns
/// - `Some(WarningId)` if the key matches this registry.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive** and exact; there are no aliases.
pub fn from_key(key: &str) -> Option<WarningId> {
    WARNINGS.iter().find(|w| w.key == key).map(|w| w.id)
}

/// Full key string.
pub fn key(id: WarningId) -> &'static str {
    info_for(id).key
}

/// User-facing message.
pub fn message_for(id: WarningId) -> &'static str {
    info_for(id).message
}

/// Full metadata.
///
/// ## Parameters
/// - `id`: Warning identifier.
///
/// ## Returns
/// - The associated [`WarningInfo`] from [`WARNINGS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: WarningId) -> &'static WarningInfo {
    WARNINGS.iter().find(|w| w.id == id).expect("warning info missing")
}

impl fmt::Display for WarningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(key(*self))
    }
}

impl TryFrom<&str> for WarningId {
    type Error = UnknownWarningKey;

    /// Strict conversion for callers that treat an unknown key as an error.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        from_key(value).ok_or_else(|| UnknownWarningKey::new(value))
    }
}

// --- helpers -----------------------------------------------------------------

const fn entry(
    id: WarningId,
    key: &'static str,
    message: &'static str,
    since: ReleaseVersion,
    removed_in: ReleaseVersion,
    stage: Stage,
) -> WarningInfo {
    WarningInfo {
        id,
        key,
        message,
        since,
        removed_in,
        stage,
    }
}

// --- serde -------------------------------------------------------------------

/// Serialize a [`WarningId`] as its full key string, and deserialize by exact key
/// lookup. Unknown keys are rejected at deserialization time, so ids coming in from
/// config or wire formats are always catalog members.
#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{WarningId, from_key, key};

    impl Serialize for WarningId {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(key(*self))
        }
    }

    impl<'de> Deserialize<'de> for WarningId {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            from_key(&raw).ok_or_else(|| D::Error::custom(format!("unknown deprecation key `{raw}`")))
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn id_serializes_as_its_key_string() {
        let json = serde_json::to_string(&WarningId::AUFSSnapshotter).expect("serialize");
        assert_eq!(json, "\"io.containerd.deprecation/aufs-snapshotter\"");
    }

    #[test]
    fn id_round_trips_through_json() {
        for w in WARNINGS {
            let json = serde_json::to_string(&w.id).expect("serialize");
            let back: WarningId = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, w.id);
        }
    }

    #[test]
    fn unknown_key_fails_to_deserialize() {
        let err = serde_json::from_str::<WarningId>("\"io.containerd.deprecation/not-real\"")
            .expect_err("unknown key must not deserialize");
        assert!(err.to_string().contains("unknown deprecation key"));
    }
}
