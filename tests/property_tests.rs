//! Property tests for the catalog lookups.
//!
//! The lookups are total functions over arbitrary strings; these properties poke at
//! the long tail of inputs the unit tests don't enumerate.

use deprecations_core::warnings::{self, PREFIX, WARNINGS};
use proptest::prelude::*;

proptest! {
    /// A namespaced key validates iff it is literally in the table.
    #[test]
    fn namespaced_lookup_agrees_with_the_table(suffix in "[a-z0-9-]{1,40}") {
        let key = format!("{PREFIX}{suffix}");
        let resolved = warnings::from_key(&key).is_some();
        let in_table = WARNINGS.iter().any(|w| w.key == key);
        prop_assert_eq!(resolved, in_table);
        prop_assert_eq!(warnings::valid(&key), in_table);
        prop_assert_eq!(warnings::message(&key).is_some(), in_table);
    }

    /// Strings outside the namespace never validate.
    #[test]
    fn unprefixed_strings_never_validate(s in "\\PC*") {
        prop_assume!(!s.starts_with(PREFIX));
        prop_assert!(!warnings::valid(&s));
        prop_assert_eq!(warnings::message(&s), None);
    }

    /// Lookups are pure: a second call returns the same answer.
    #[test]
    fn lookups_are_idempotent(s in "\\PC*") {
        prop_assert_eq!(warnings::valid(&s), warnings::valid(&s));
        prop_assert_eq!(warnings::message(&s), warnings::message(&s));
    }
}
