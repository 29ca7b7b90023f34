//! Ordering engine: stable insertion sort with an exact comparison count.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use loadout_core::DomainError;

use crate::item::Item;

/// Field an inventory can be ordered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Type,
    Priority,
}

impl SortKey {
    /// All keys, in the order a menu would offer them.
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Type, SortKey::Priority];

    /// Compare two items under this key.
    ///
    /// Text keys compare byte-wise; priority compares numerically, ascending.
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::Name => a.name().as_bytes().cmp(b.name().as_bytes()),
            SortKey::Type => a.kind().as_bytes().cmp(b.kind().as_bytes()),
            SortKey::Priority => a.priority().cmp(&b.priority()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Type => "type",
            SortKey::Priority => "priority",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::invalid_field(
                    "sort_key",
                    format!("expected one of name, type, priority (got {s:?})"),
                )
            })
    }
}

/// Stable insertion sort over `items`, returning the number of comparisons made.
///
/// For each position `i` the element there is held while its left neighbours
/// are scanned; the scan stops at the first neighbour that is not `Greater`
/// than the held element. Every comparison counts, including that final one.
/// The scanned run is then shifted one slot right and the held element
/// dropped into the gap.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparisons = 0u64;

    for i in 1..items.len() {
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if compare(&items[j - 1], &items[i]) == Ordering::Greater {
                j -= 1;
            } else {
                break;
            }
        }
        if j < i {
            items[j..=i].rotate_right(1);
        }
    }

    comparisons
}

/// Sort items by `key`, returning the number of comparisons made.
pub fn sort_items(items: &mut [Item], key: SortKey) -> u64 {
    insertion_sort_by(items, |a, b| key.compare(a, b))
}
