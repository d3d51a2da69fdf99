//! Date-aligned intersection of two parties' declared intervals.

use slot_core::Interval;

use crate::store::DateSlots;

/// Compute the overlapping sub-intervals between two parties' availability.
///
/// Only dates present in BOTH slot sets are considered, in ascending order.
/// For each shared date the full cross product of the two interval lists is
/// intersected pairwise; intersections are `[max(starts), min(ends))` and
/// survive only with positive length -- touching endpoints do not count.
/// Survivors are sorted by (start, end) and deduplicated. Dates with no
/// surviving overlap are omitted entirely, so an empty result means the
/// parties share no free time at all.
///
/// Pure function of its inputs: nothing is loaded, persisted, or windowed
/// here. Presentation-layer bounds ("next 7 days") are a display-time filter
/// over the returned mapping.
pub fn compute_overlaps(admin: &DateSlots, user: &DateSlots) -> DateSlots {
    let mut result = DateSlots::new();

    for (date, admin_slots) in admin {
        let Some(user_slots) = user.get(date) else {
            continue;
        };

        let mut overlaps: Vec<Interval> = Vec::new();
        for a in admin_slots {
            for u in user_slots {
                if let Some(overlap) = a.intersect(u) {
                    overlaps.push(overlap);
                }
            }
        }

        overlaps.sort();
        overlaps.dedup();

        if !overlaps.is_empty() {
            result.insert(date.clone(), overlaps);
        }
    }

    result
}
