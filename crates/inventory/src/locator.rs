//! Locator: binary search by name over a name-ordered slice.

use core::cmp::Ordering;

use crate::item::Item;

/// Position of the item called `name`, if present.
///
/// `items` must already be ordered by name; this function never sorts. Bounds
/// are inclusive and the midpoint is `floor((lo + hi) / 2)`.
pub fn binary_search_by_name(items: &[Item], name: &str) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    let target = name.as_bytes();
    let mut lo = 0usize;
    let mut hi = items.len() - 1;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match items[mid].name().as_bytes().cmp(target) {
            Ordering::Equal => {
                tracing::trace!(name, position = mid, "locator hit");
                return Some(mid);
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            }
        }
    }

    tracing::trace!(name, "locator miss");
    None
}
