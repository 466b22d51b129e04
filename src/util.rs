/// Sorts `values` ascending with a stable top-down merge sort and drops duplicates, leaving the
/// exact sequence a tree is built from.
pub(crate) fn sorted_distinct<T: Ord>(values: Vec<T>) -> Vec<T> {
    let mut sorted = merge_sort(values);
    sorted.dedup();
    sorted
}

/// Stable top-down merge sort. Recursion depth is `lg N` so this is fine for any input size.
fn merge_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }

    let right = values.split_off(values.len() / 2);
    merge(merge_sort(values), merge_sort(right))
}

/// Merges two sorted runs. Ties go to `left` to keep the sort stable.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return merged,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }
}
