//! Contract tests for the constraint vocabulary, exercised through the
//! public API exactly as an external validation consumer would use it:
//! construct constraints, read them back, expand composites, and evaluate
//! candidates with each kind's `satisfies`.

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use stricture_core::{
    Constraint, ConstraintKind, GreaterThan, Interval, LengthBounds, MultipleOf, RegexMatch,
    TimezoneRequirement,
};

fn expansion_kinds<T: Clone>(constraint: &Constraint<T>) -> Vec<ConstraintKind> {
    constraint.expanded().iter().map(|c| c.kind()).collect()
}

// ---------- Comparison bounds across ordered types ----------

#[test]
fn greater_than_partitions_integers_at_the_bound() {
    let gt = GreaterThan::new(4);
    assert!(gt.satisfies(&5), "5 > 4");
    assert!(!gt.satisfies(&4), "the bound itself is excluded");
    assert!(!gt.satisfies(&3), "3 is below the bound");
}

#[test]
fn comparison_bounds_apply_to_floats_and_dates() {
    assert!(GreaterThan::new(0.5).satisfies(&0.75));
    assert!(!GreaterThan::new(0.5).satisfies(&0.5));

    let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    assert!(GreaterThan::new(before).satisfies(&new_year));
    assert!(!GreaterThan::new(new_year).satisfies(&before));

    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();
    assert!(GreaterThan::new(epoch).satisfies(&later));
}

#[test]
fn constructed_constraints_read_back_structurally_equal() {
    let gt = GreaterThan::new(42);
    assert_eq!(GreaterThan::new(*gt.bound()), gt);

    let bounds = LengthBounds::new(2, Some(8));
    assert_eq!(
        LengthBounds::new(bounds.min_length(), bounds.max_length()),
        bounds
    );

    let pattern = RegexMatch::new("[a-z]+").unwrap();
    assert_eq!(
        RegexMatch::with_flags(pattern.pattern(), pattern.flags()).unwrap(),
        pattern
    );
}

// ---------- Interval composite ----------

#[test]
fn interval_between_half_and_one_is_inclusive() {
    let interval = Interval::new().with_ge(0.5).with_le(1.0);
    assert!(interval.satisfies(&0.5), "inclusive lower edge");
    assert!(interval.satisfies(&1.0), "inclusive upper edge");
    assert!(!interval.satisfies(&1.1), "above the window");
    assert!(!interval.satisfies(&0.49), "below the window");
}

#[test]
fn interval_expansion_follows_declaration_independent_order() {
    // Bounds set in scrambled order still expand as gt, ge, lt, le.
    let interval = Interval::new().with_le(4).with_lt(3).with_ge(2).with_gt(1);
    let constraint = Constraint::from(interval);
    assert_eq!(
        expansion_kinds(&constraint),
        vec![
            ConstraintKind::GreaterThan,
            ConstraintKind::GreaterOrEqual,
            ConstraintKind::LessThan,
            ConstraintKind::LessOrEqual,
        ]
    );
}

#[test]
fn unset_interval_expands_to_nothing() {
    let constraint: Constraint<i64> = Constraint::from(Interval::new());
    assert!(constraint.expanded().is_empty());
    assert!(constraint.is_composite());
}

#[test]
fn expansion_is_idempotent_across_calls() {
    let constraint = Constraint::from(Interval::new().with_gt(0).with_lt(100));
    assert_eq!(constraint.expanded(), constraint.expanded());

    let bounds: Constraint<String> = Constraint::from(LengthBounds::new(1, Some(3)));
    assert_eq!(bounds.expanded(), bounds.expanded());
}

// ---------- Length bounds composite ----------

#[test]
fn length_window_one_to_three() {
    let bounds = LengthBounds::new(1, Some(3));
    assert!(bounds.satisfies("ab"));
    assert!(!bounds.satisfies(""), "below the minimum");
    assert!(!bounds.satisfies("abcd"), "above the maximum");
}

#[test]
fn length_bounds_expansion_omits_defaults() {
    let unconstrained: Constraint<String> = Constraint::from(LengthBounds::default());
    assert!(unconstrained.expanded().is_empty());

    let only_max: Constraint<String> = Constraint::from(LengthBounds::new(0, Some(5)));
    assert_eq!(expansion_kinds(&only_max), vec![ConstraintKind::MaxLength]);

    let both: Constraint<String> = Constraint::from(LengthBounds::new(1, Some(5)));
    assert_eq!(
        expansion_kinds(&both),
        vec![ConstraintKind::MinLength, ConstraintKind::MaxLength]
    );
}

// ---------- Divisibility ----------

#[test]
fn multiple_of_three_over_integers() {
    let step = MultipleOf::new(3);
    for valid in [0, 3, 9] {
        assert!(step.satisfies(&valid), "{valid} is a multiple of 3");
    }
    for invalid in [1, 2, 4] {
        assert!(!step.satisfies(&invalid), "{invalid} is not a multiple of 3");
    }
}

#[test]
fn multiple_of_half_over_floats() {
    let step = MultipleOf::new(0.5);
    for valid in [0.0, 0.5, 1.0, 1.5] {
        assert!(step.satisfies(&valid), "{valid} is a multiple of 0.5");
    }
    for invalid in [0.4, 1.1] {
        assert!(!step.satisfies(&invalid), "{invalid} is not a multiple of 0.5");
    }
}

// ---------- Regex full match ----------

#[test]
fn digit_pattern_requires_full_match() {
    let digits = RegexMatch::new(r"\d+").unwrap();
    assert!(digits.satisfies("123"));
    assert!(!digits.satisfies("12a"), "a search would have found a match here");
}

// ---------- Timezone requirements ----------

#[test]
fn timezone_policies_over_chrono_values() {
    let naive = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let aware_utc = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let aware_offset = FixedOffset::east_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .unwrap();

    assert!(!TimezoneRequirement::naive().satisfies(&aware_utc));
    assert!(TimezoneRequirement::naive().satisfies(&naive));

    assert!(TimezoneRequirement::any_aware().satisfies(&aware_utc));
    assert!(TimezoneRequirement::any_aware().satisfies(&aware_offset));
    assert!(!TimezoneRequirement::any_aware().satisfies(&naive));

    let utc_only = TimezoneRequirement::exact("UTC");
    assert!(utc_only.satisfies(&aware_utc));
    assert!(!utc_only.satisfies(&aware_offset));
    assert!(!utc_only.satisfies(&naive));
}

// ---------- Mixed attached lists ----------

#[test]
fn mixed_list_flattens_in_attachment_order() {
    let attached: Vec<Constraint<i64>> = vec![
        Constraint::documentation("percentage score"),
        Constraint::from(Interval::new().with_ge(0).with_le(100)),
        Constraint::multiple_of(5),
    ];
    let flat = Constraint::flatten(&attached);
    let kinds: Vec<ConstraintKind> = flat.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ConstraintKind::Documentation,
            ConstraintKind::GreaterOrEqual,
            ConstraintKind::LessOrEqual,
            ConstraintKind::MultipleOf,
        ]
    );
    assert!(flat.iter().all(Constraint::is_atomic));
}

#[test]
fn immutable_constraints_are_shared_across_threads_without_locks() {
    let attached: Vec<Constraint<i64>> = vec![
        Constraint::from(Interval::new().with_ge(0).with_le(100)),
        Constraint::multiple_of(5),
        Constraint::regex_match(r"\d+").unwrap(),
    ];
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let flat = Constraint::flatten(&attached);
                assert_eq!(flat.len(), 4);
                assert!(flat.iter().all(Constraint::is_atomic));
            });
        }
    });
}

#[test]
fn serialized_list_is_externally_tagged_with_kind_names() {
    let attached: Vec<Constraint<i64>> = vec![
        Constraint::greater_than(4),
        Constraint::from(LengthBounds::new(1, Some(3))),
        Constraint::unit("points"),
    ];
    let json = serde_json::to_string(&attached).unwrap();
    assert_eq!(
        json,
        r#"[{"greater_than":{"bound":4}},{"length_bounds":{"min_length":1,"max_length":3}},{"unit":{"unit":"points"}}]"#
    );
}
