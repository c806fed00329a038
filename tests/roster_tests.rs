//! Integration tests for roster data operations
//!
//! Covers the add/find/average/top-three/grade-range operations through the
//! public API, plus property tests over arbitrary rosters.

use gradebook::models::{GradeHistogram, BUCKET_COUNT};
use gradebook::{Roster, RosterError, Student};
use proptest::prelude::*;

/// Roster whose students have the given totals (assignment grade 0), ids 1..
fn roster_with_totals(totals: &[f64]) -> Roster {
    let mut roster = Roster::new();
    for (i, total) in totals.iter().enumerate() {
        roster
            .add(Student::new(format!("student{}", i + 1), i as i32 + 1, *total, 0.0))
            .expect("ids are distinct");
    }
    roster
}

// ============================================================================
// ADD / FIND
// ============================================================================

#[test]
fn test_duplicate_add_leaves_roster_unchanged() {
    let mut roster = roster_with_totals(&[40.0, 60.0]);

    let result = roster.add(Student::new("Intruder", 2, 80.0, 20.0));

    assert_eq!(result, Err(RosterError::DuplicateId(2)));
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.find(2).unwrap().name, "student2");
}

#[test]
fn test_find_returns_matching_record() {
    let mut roster = Roster::new();
    roster.add(Student::new("Ada", 10, 70.0, 15.0)).unwrap();
    roster.add(Student::new("Grace", -4, 55.5, 12.25)).unwrap();

    let grace = roster.find(-4).expect("negative ids are allowed");
    assert_eq!(grace.name, "Grace");
    assert_eq!(grace.total_grade(), 67.75);
    assert!(roster.find(11).is_none());
}

#[test]
fn test_out_of_range_grades_accepted() {
    let mut roster = Roster::new();
    roster.add(Student::new("Over", 1, 95.0, 30.0)).unwrap();
    roster.add(Student::new("Under", 2, -5.0, 0.0)).unwrap();

    assert_eq!(roster.find(1).unwrap().total_grade(), 125.0);
    assert_eq!(roster.find(2).unwrap().total_grade(), -5.0);
}

// ============================================================================
// STATISTICS
// ============================================================================

#[test]
fn test_class_average() {
    assert_eq!(Roster::new().class_average(), 0.0);

    let roster = roster_with_totals(&[50.0, 70.0, 90.0]);
    assert!((roster.class_average() - 70.0).abs() < 1e-9);
}

#[test]
fn test_top_three_excludes_lowest_of_four() {
    let roster = roster_with_totals(&[50.0, 90.0, 70.0, 30.0]);

    let top: Vec<f64> = roster.top_three().iter().map(|s| s.total_grade()).collect();

    assert_eq!(top, vec![90.0, 70.0, 50.0]);
    // The roster itself keeps insertion order
    let ids: Vec<i32> = roster.students().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_grade_ranges_exact_drop_behavior() {
    let roster = roster_with_totals(&[5.0, 15.0, 95.0, 100.0]);

    let histogram = roster.grade_ranges();

    assert_eq!(histogram.counts(), &[1, 1, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(histogram.dropped(), 1);
}

#[test]
fn test_grade_ranges_bucket_boundaries() {
    let roster = roster_with_totals(&[9.99, 10.0, 89.99, 90.0, 99.99]);

    let histogram = roster.grade_ranges();

    assert_eq!(histogram.count(0), 1);
    assert_eq!(histogram.count(1), 1);
    assert_eq!(histogram.count(8), 1);
    assert_eq!(histogram.count(9), 2);
    assert_eq!(histogram.dropped(), 0);
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_insertion_order_preserved(totals in prop::collection::vec(0.0f64..100.0, 0..20)) {
        let roster = roster_with_totals(&totals);
        let listed: Vec<f64> = roster.students().iter().map(|s| s.total_grade()).collect();
        prop_assert_eq!(listed, totals);
    }

    #[test]
    fn prop_average_within_bounds(totals in prop::collection::vec(0.0f64..100.0, 1..20)) {
        let roster = roster_with_totals(&totals);
        let min = totals.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = totals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let average = roster.class_average();
        prop_assert!(average >= min - 1e-9 && average <= max + 1e-9);
    }

    #[test]
    fn prop_histogram_conserves_students(totals in prop::collection::vec(-20.0f64..130.0, 0..30)) {
        let roster = roster_with_totals(&totals);
        let histogram = roster.grade_ranges();
        prop_assert_eq!(histogram.counted() + histogram.dropped(), totals.len());
        let expected_dropped = totals
            .iter()
            .filter(|t| GradeHistogram::bucket_index(**t).is_none())
            .count();
        prop_assert_eq!(histogram.dropped(), expected_dropped);
        prop_assert_eq!(histogram.ranges().count(), BUCKET_COUNT);
    }

    #[test]
    fn prop_top_three_is_sorted_prefix(totals in prop::collection::vec(0.0f64..100.0, 0..12)) {
        let roster = roster_with_totals(&totals);
        let top = roster.top_three();
        prop_assert_eq!(top.len(), totals.len().min(3));
        for pair in top.windows(2) {
            prop_assert!(pair[0].total_grade() >= pair[1].total_grade());
        }
        if let Some(first) = top.first() {
            let max = totals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(first.total_grade(), max);
        }
    }
}
