use std::cmp::Ordering;
use std::str::FromStr;

use crate::order::Order;

/// Ordering key for one record in the merge heap.
///
/// The merge phase always runs over a minimum heap. Ascending sorts use the raw
/// key string unchanged. Descending sorts invert the key instead of the heap:
/// a key that parses as a number becomes its arithmetic negation, any other key
/// is mapped character by character to `255 - code point`, which reverses
/// lexicographic order for single-byte character sets. The complement transform
/// is not a correct inversion for code points above 255; those saturate to NUL.
/// It also does not reverse prefix pairs: the complement of a prefix is still a
/// prefix of the longer string's complement, so "ab" keeps sorting before "abc".
#[derive(Debug)]
pub(crate) enum MergeKey {
    Text {
        s: String,
    },
    Number {
        n: f64,
    },
}

impl MergeKey {
    pub(crate) fn new(raw: &str, order: &Order) -> MergeKey {
        match order {
            Order::Asc => {
                MergeKey::Text {
                    s: raw.to_string(),
                }
            }
            Order::Desc => {
                match f64::from_str(raw) {
                    Ok(n) => {
                        MergeKey::Number {
                            n: -n,
                        }
                    }
                    Err(_) => {
                        MergeKey::Text {
                            s: complement(raw),
                        }
                    }
                }
            }
        }
    }
}

fn complement(raw: &str) -> String {
    raw.chars()
        .map(|c| char::from_u32(255u32.saturating_sub(c as u32)).unwrap_or('\u{0}'))
        .collect()
}

impl Eq for MergeKey {}

impl PartialEq<Self> for MergeKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for MergeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MergeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MergeKey::Text { s }, MergeKey::Text { s: t }) => {
                s.cmp(t)
            }
            (MergeKey::Number { n }, MergeKey::Number { n: m }) => {
                if n.is_nan() && m.is_nan() {
                    Ordering::Equal
                } else if n.is_nan() && !m.is_nan() {
                    Ordering::Less
                } else if !n.is_nan() && m.is_nan() {
                    Ordering::Greater
                } else {
                    n.partial_cmp(m).unwrap()
                }
            }
            // numeric keys sort before textual keys when a descending column
            // mixes parseable and unparseable values
            (MergeKey::Number { .. }, MergeKey::Text { .. }) => {
                Ordering::Less
            }
            (MergeKey::Text { .. }, MergeKey::Number { .. }) => {
                Ordering::Greater
            }
        }
    }
}
