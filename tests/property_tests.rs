//! Property-based tests for level ranges, statement assembly and labels.
//!
//! Tests validate:
//! 1. Range membership follows priority order for open-ended ranges
//! 2. Fragment combination never yields an empty string
//! 3. Fixed-width labels always have exactly the requested width

use prettylog::model::{combine, truncate_or_pad, LevelRange, LogLevel, StatementAssembler};
use proptest::prelude::*;

fn fragment() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-zA-Z0-9 ]{1,12}".prop_map(Some),
    ]
}

// ===== Property 1: Level Ranges =====

proptest! {
    #[test]
    fn allow_from_and_until_split_on_priority(p1 in any::<i64>(), p2 in any::<i64>()) {
        prop_assume!(p1 < p2);
        let lower = LogLevel::custom("🔸", p1);
        let upper = LogLevel::custom("🔹", p2);

        prop_assert!(LevelRange::allow_from(lower.clone()).contains(&upper));
        prop_assert!(!LevelRange::allow_until(lower).contains(&upper));
    }

    #[test]
    fn allow_none_contains_no_level(p in any::<i64>()) {
        prop_assert!(!LevelRange::allow_none().contains(&LogLevel::custom("🔸", p)));
    }

    #[test]
    fn allow_all_contains_every_level(p in any::<i64>()) {
        prop_assert!(LevelRange::allow_all().contains(&LogLevel::custom("🔸", p)));
    }

    #[test]
    fn range_bounds_are_inclusive(p in any::<i64>()) {
        let level = LogLevel::custom("🔸", p);
        prop_assert!(LevelRange::allow_from(level.clone()).contains(&level));
        prop_assert!(LevelRange::allow_until(level.clone()).contains(&level));
        prop_assert!(LevelRange::between(level.clone(), level.clone()).contains(&level));
    }
}

// ===== Property 2: Statement Assembly =====

proptest! {
    #[test]
    fn combine_of_only_empty_fragments_is_absent(
        fragments in prop::collection::vec(prop_oneof![Just(None), Just(Some(String::new()))], 0..8)
    ) {
        prop_assert_eq!(combine(fragments, " - "), None);
    }

    #[test]
    fn combine_is_never_empty(fragments in prop::collection::vec(fragment(), 0..8)) {
        if let Some(joined) = combine(fragments, " - ") {
            prop_assert!(!joined.is_empty());
        }
    }

    #[test]
    fn render_without_sensitive_never_contains_sensitive_part(
        public in prop::collection::vec(fragment(), 0..4),
        secret in "[A-Z]{16}",
    ) {
        let statement = StatementAssembler::new(public, [Some(secret.clone())], " - ");
        if let Some(rendered) = statement.render(false) {
            prop_assert!(!rendered.contains(&secret));
        }
    }

    #[test]
    fn render_is_idempotent(
        public in prop::collection::vec(fragment(), 0..4),
        sensitive in prop::collection::vec(fragment(), 0..4),
        include in any::<bool>(),
    ) {
        let statement = StatementAssembler::new(public, sensitive, " - ");
        prop_assert_eq!(statement.render(include), statement.render(include));
    }
}

// ===== Property 3: Fixed-Width Labels =====

proptest! {
    #[test]
    fn truncate_or_pad_has_exact_width(label in "\\PC{0,40}", width in 0usize..32) {
        prop_assert_eq!(truncate_or_pad(&label, width).chars().count(), width);
    }

    #[test]
    fn truncated_labels_end_with_marker(label in "[a-z]{2,40}", width in 1usize..32) {
        prop_assume!(label.chars().count() > width);
        prop_assert!(truncate_or_pad(&label, width).ends_with('…'));
    }
}
