use std::cmp::Ordering;
use std::time::Instant;

use tracing::debug;

use territory_model::TerritoryRecord;

/// Compare two records by assignment date.
///
/// A record without an assignment date always comes first, including when
/// neither record has one. This is not a total order, so it must only be
/// driven by [`sort_by_assignment`].
pub fn assignment_order(a: &TerritoryRecord, b: &TerritoryRecord) -> Ordering {
    let Some(a_date) = a.date_assigned else {
        return Ordering::Less;
    };
    let Some(b_date) = b.date_assigned else {
        return Ordering::Greater;
    };
    a_date.cmp(&b_date)
}

/// Return a copy of `records` ordered by [`assignment_order`].
///
/// Never-assigned records keep their relative order and precede every dated
/// record; dated records ascend, ties keeping their relative order.
pub fn sort_by_assignment(records: &[TerritoryRecord]) -> Vec<TerritoryRecord> {
    let started = Instant::now();
    let sorted = merge_sort_by(records.to_vec(), &assignment_order);
    debug!(
        records = sorted.len(),
        duration_ms = started.elapsed().as_millis(),
        "sorted territories by assignment date"
    );
    sorted
}

// `slice::sort_by` may panic on comparators that are not total orders.
fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);
    merge(left, right, compare)
}

/// Takes from the right run only when the left element compares `Greater`.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}
