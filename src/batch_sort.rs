use csv::StringRecord;

use crate::order::Order;

/// Sort one in-memory batch of records by the key field.
///
/// Top-down merge sort: split in half, sort each half recursively, merge. Keys
/// are compared as raw strings - lexicographically - with the relation flipped
/// for descending order. The merge takes the left element on ties, so equal
/// keys keep their input order. Recursion depth is logarithmic in the batch
/// limit.
///
/// All records are assumed to have the same arity as the header; the csv
/// reader rejects ragged records before they reach this point.
pub(crate) fn sort_batch(records: Vec<StringRecord>, key_index: usize, order: &Order) -> Vec<StringRecord> {
    if records.len() <= 1 {
        return records;
    }

    let mut left = records;
    let right = left.split_off(left.len() / 2);
    let left = sort_batch(left, key_index, order);
    let right = sort_batch(right, key_index, order);
    merge(left, right, key_index, order)
}

fn merge(left: Vec<StringRecord>, right: Vec<StringRecord>, key_index: usize, order: &Order) -> Vec<StringRecord> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let take_left = match order {
            Order::Asc => l[key_index] <= r[key_index],
            Order::Desc => l[key_index] >= r[key_index],
        };
        if take_left {
            result.push(left.next().unwrap());
        } else {
            result.push(right.next().unwrap());
        }
    }
    result.extend(left);
    result.extend(right);
    result
}
