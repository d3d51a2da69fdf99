//! Tests for the date-aligned intersection engine.

use overlap_engine::{compute_overlaps, DateSlots};
use slot_core::Interval;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn slot(text: &str) -> Interval {
    text.parse().unwrap_or_else(|e| panic!("{:?} should parse: {}", text, e))
}

fn day(date: &str, texts: &[&str]) -> (String, Vec<Interval>) {
    (date.to_string(), texts.iter().map(|t| slot(t)).collect())
}

fn slots(days: &[(String, Vec<Interval>)]) -> DateSlots {
    days.iter().cloned().collect()
}

// ── Core intersection semantics ─────────────────────────────────────────────

#[test]
fn bounded_overlap_on_shared_date() {
    let admin = slots(&[day("2025-12-24", &["18:00-23:00"])]);
    let user = slots(&[day("2025-12-24", &["20:00-23:59"])]);

    let result = compute_overlaps(&admin, &user);

    assert_eq!(result, slots(&[day("2025-12-24", &["20:00-23:00"])]));
}

#[test]
fn touching_endpoints_are_not_an_overlap() {
    // 09:00-10:00 and 10:00-11:00 share only the instant 10:00, which the
    // half-open ranges both exclude and include respectively -- no overlap,
    // and the date is absent from the result, not present with an empty list.
    let admin = slots(&[day("2025-12-24", &["09:00-10:00"])]);
    let user = slots(&[day("2025-12-24", &["10:00-11:00"])]);

    let result = compute_overlaps(&admin, &user);

    assert!(result.is_empty());
}

#[test]
fn disjoint_date_sets_yield_empty_result() {
    let admin = slots(&[day("2025-12-24", &["18:00-23:00"])]);
    let user = slots(&[day("2025-12-25", &["18:00-23:00"])]);

    assert!(compute_overlaps(&admin, &user).is_empty());
}

#[test]
fn empty_party_yields_empty_result() {
    let admin = slots(&[day("2025-12-24", &["18:00-23:00"])]);
    let empty = DateSlots::new();

    assert!(compute_overlaps(&admin, &empty).is_empty());
    assert!(compute_overlaps(&empty, &admin).is_empty());
    assert!(compute_overlaps(&empty, &empty).is_empty());
}

#[test]
fn identical_declarations_intersect_to_themselves() {
    let both = slots(&[day("2025-12-24", &["18:00-23:00"])]);

    assert_eq!(compute_overlaps(&both, &both), both);
}

#[test]
fn containment_returns_the_smaller_interval() {
    let admin = slots(&[day("2025-12-24", &["10:00-20:00"])]);
    let user = slots(&[day("2025-12-24", &["12:30-14:00"])]);

    let result = compute_overlaps(&admin, &user);

    assert_eq!(result, slots(&[day("2025-12-24", &["12:30-14:00"])]));
}

// ── Many-to-many per date ───────────────────────────────────────────────────

#[test]
fn cross_product_collects_every_pairwise_overlap() {
    let admin = slots(&[day("2025-12-24", &["09:00-12:00", "14:00-18:00"])]);
    let user = slots(&[day("2025-12-24", &["11:00-15:00", "17:00-19:00"])]);

    let result = compute_overlaps(&admin, &user);

    // (09-12 ∩ 11-15) = 11-12, (14-18 ∩ 11-15) = 14-15, (14-18 ∩ 17-19) = 17-18.
    assert_eq!(
        result,
        slots(&[day("2025-12-24", &["11:00-12:00", "14:00-15:00", "17:00-18:00"])])
    );
}

#[test]
fn redundant_declarations_are_deduplicated() {
    // A party may store the same interval twice; the overlap appears once.
    let admin = slots(&[day("2025-12-24", &["18:00-22:00", "18:00-22:00"])]);
    let user = slots(&[day("2025-12-24", &["19:00-23:00"])]);

    let result = compute_overlaps(&admin, &user);

    assert_eq!(result, slots(&[day("2025-12-24", &["19:00-22:00"])]));
}

#[test]
fn overlaps_are_sorted_by_start_then_end() {
    // Declarations deliberately out of order.
    let admin = slots(&[day("2025-12-24", &["20:00-23:00", "08:00-10:00"])]);
    let user = slots(&[day("2025-12-24", &["07:00-23:59"])]);

    let result = compute_overlaps(&admin, &user);

    assert_eq!(
        result,
        slots(&[day("2025-12-24", &["08:00-10:00", "20:00-23:00"])])
    );
}

// ── Multiple dates ──────────────────────────────────────────────────────────

#[test]
fn only_shared_dates_with_survivors_appear() {
    let admin = slots(&[
        day("2025-12-21", &["16:00-23:00"]),
        day("2025-12-24", &["09:00-10:00"]),
        day("2025-12-26", &["14:00-23:59"]),
    ]);
    let user = slots(&[
        day("2025-12-21", &["18:30-22:00"]),
        day("2025-12-24", &["10:00-11:00"]), // touching only
        day("2025-12-25", &["12:00-16:00"]), // date not shared
    ]);

    let result = compute_overlaps(&admin, &user);

    assert_eq!(result, slots(&[day("2025-12-21", &["18:30-22:00"])]));
}

#[test]
fn result_dates_are_in_ascending_order() {
    let admin = slots(&[
        day("2025-12-27", &["10:00-12:00"]),
        day("2025-12-21", &["10:00-12:00"]),
        day("2025-12-24", &["10:00-12:00"]),
    ]);
    let user = admin.clone();

    let overlaps = compute_overlaps(&admin, &user);
    let dates: Vec<&String> = overlaps.keys().collect();

    assert_eq!(dates, ["2025-12-21", "2025-12-24", "2025-12-27"]);
}
