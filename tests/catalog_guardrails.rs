//! Guardrails keeping the warning catalog and its id enum in lockstep.
//!
//! The catalog table is the single source of truth, but the id enum and the key
//! strings are both public contract. These tests pin the whole surface: every
//! declared id has exactly one entry, every key carries the shared namespace, and
//! the literal spellings cannot drift without a test failure.

use std::collections::HashSet;

use deprecations_core::warnings::{self, PREFIX, WARNINGS, WarningId};

/// Every declared identifier with its expected key suffix.
///
/// Deliberately spelled out as literals: if an entry in the catalog is renamed or
/// dropped, this list makes the diff loud.
const DECLARED: &[(WarningId, &str)] = &[
    (WarningId::PullSchema1Image, "pull-schema-1-image"),
    (WarningId::GoPluginLibrary, "go-plugin-library"),
    (WarningId::CRISystemdCgroupV1, "cri-systemd-cgroup-v1"),
    (WarningId::CRIRegistryMirrors, "cri-registry-mirrors"),
    (WarningId::CRIRegistryAuths, "cri-registry-auths"),
    (WarningId::CRIRegistryConfigs, "cri-registry-configs"),
    (WarningId::CRIAPIV1Alpha2, "cri-api-v1alpha2"),
    (WarningId::AUFSSnapshotter, "aufs-snapshotter"),
    (WarningId::RuntimeV1, "runtime-v1"),
    (WarningId::RuntimeRuncV1, "runtime-runc-v1"),
];

#[test]
fn catalog_covers_exactly_the_declared_identifiers() {
    assert_eq!(WARNINGS.len(), DECLARED.len());

    for (id, suffix) in DECLARED {
        let key = format!("{PREFIX}{suffix}");
        assert_eq!(warnings::from_key(&key), Some(*id), "lookup for {key}");
        assert_eq!(warnings::key(*id), key, "canonical key for {id:?}");
        assert!(warnings::valid(&key));
    }
}

#[test]
fn no_duplicate_ids_or_keys() {
    let ids: HashSet<_> = WARNINGS.iter().map(|w| w.id).collect();
    let keys: HashSet<_> = WARNINGS.iter().map(|w| w.key).collect();
    assert_eq!(ids.len(), WARNINGS.len());
    assert_eq!(keys.len(), WARNINGS.len());
}

#[test]
fn every_key_is_namespaced_kebab_case() {
    for w in WARNINGS {
        let suffix = w
            .key
            .strip_prefix(PREFIX)
            .unwrap_or_else(|| panic!("{} lacks the shared namespace", w.key));
        assert!(!suffix.is_empty());
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "{suffix} is not kebab-case"
        );
    }
}

#[test]
fn every_entry_has_a_message_and_release_metadata() {
    for w in WARNINGS {
        assert!(!w.message.is_empty(), "{} has an empty message", w.key);
        assert_eq!(warnings::message(w.key), Some(w.message));
        assert_eq!(warnings::message_for(w.id), w.message);
        assert!(!w.since.is_empty());
        assert!(!w.removed_in.is_empty());
    }
}

#[test]
fn info_for_is_total_over_the_declared_ids() {
    for (id, _) in DECLARED {
        let info = warnings::info_for(*id);
        assert_eq!(info.id, *id);
    }
}
