//! Preparation timeline ordering.
//!
//! Timeline markers count down to the event: "T-3 days", "T-1.5 hours",
//! "T-30 min", "T-0". Days sort earliest first; hours and minutes sort by
//! their magnitude after the day tasks and the event marker.

use crate::models::RunbookItem;

/// Sort key for markers that cannot be read; they go last.
pub const UNKNOWN_TIMELINE_KEY: f64 = 999.0;

/// Sort key for a timeline marker.
///
/// Singular units ("T-1 day", "T-1 hour") are read the same as plurals, so a
/// one-day task sorts between the two-day tasks and the event instead of last.
pub fn timeline_sort_key(timeline: &str) -> f64 {
    let timeline = timeline.trim();
    if timeline == "T-0" {
        return 0.0;
    }

    let Some(amount) = leading_amount(timeline) else {
        return UNKNOWN_TIMELINE_KEY;
    };

    if timeline.contains("day") {
        -amount
    } else if timeline.contains("hour") || timeline.contains("min") {
        amount
    } else {
        UNKNOWN_TIMELINE_KEY
    }
}

/// Number right after the `T-` marker, e.g. `1.5` in "T-1.5 hours".
fn leading_amount(timeline: &str) -> Option<f64> {
    timeline
        .split('-')
        .nth(1)?
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}

/// Runbook items in timeline order. Ties keep their listed order.
pub fn sorted_runbook(items: &[RunbookItem]) -> Vec<&RunbookItem> {
    let mut sorted: Vec<&RunbookItem> = items.iter().collect();
    sorted.sort_by(|a, b| timeline_sort_key(&a.timeline).total_cmp(&timeline_sort_key(&b.timeline)));
    sorted
}

/// (completed, total) task counts.
pub fn progress(items: &[RunbookItem]) -> (usize, usize) {
    let done = items.iter().filter(|item| item.completed).count();
    (done, items.len())
}
