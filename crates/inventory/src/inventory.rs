//! The inventory container: storage, validation and sort-state tracking.

use loadout_core::{DomainError, DomainResult};

use crate::config::InventoryConfig;
use crate::item::{Item, ItemDraft};
use crate::locator::binary_search_by_name;
use crate::ordering::{SortKey, sort_items};

/// Fewest items a caller-requested sort accepts.
pub const MIN_ITEMS_TO_SORT: usize = 2;

/// Growable collection of uniquely named items.
///
/// `sort_key` records which ordering currently holds. It is changed by exactly
/// two things: a sort sets it, and any add or remove clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
    sort_key: Option<SortKey>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Empty inventory with the default configuration.
    ///
    /// The initial reservation is best effort here; the first add that needs
    /// storage will report an allocation failure if memory is short. Use
    /// [`Inventory::with_config`] to get that failure up front.
    pub fn new() -> Self {
        let mut items = Vec::new();
        let capacity = reserve_or_empty(&mut items, InventoryConfig::default().initial_capacity);
        Self {
            items,
            capacity,
            sort_key: None,
        }
    }

    /// Empty inventory with `config.initial_capacity` slots reserved.
    pub fn with_config(config: &InventoryConfig) -> DomainResult<Self> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(config.initial_capacity)
            .map_err(|_| DomainError::allocation_failure(config.initial_capacity))?;
        Ok(Self {
            items,
            capacity: config.initial_capacity,
            sort_key: None,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots currently reserved, in items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ordering that currently holds, if any.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Validate `candidate` and append it.
    ///
    /// Fails with `InvalidField` before `DuplicateName`; nothing is stored
    /// unless every check and the storage growth succeed.
    pub fn add(&mut self, candidate: ItemDraft) -> DomainResult<()> {
        let item = candidate.validate()?;
        if self.contains(item.name()) {
            return Err(DomainError::duplicate_name(item.name()));
        }
        self.ensure_capacity(self.items.len() + 1)?;

        tracing::debug!(name = %item.name(), count = self.items.len() + 1, "item added");
        self.items.push(item);
        self.sort_key = None;
        Ok(())
    }

    /// Remove the item called `name`, keeping the others in their order.
    pub fn remove(&mut self, name: &str) -> DomainResult<Item> {
        if self.items.is_empty() {
            return Err(DomainError::Empty);
        }
        let index = self
            .position(name)
            .ok_or_else(|| DomainError::not_found(name))?;

        let removed = self.items.remove(index);
        self.sort_key = None;
        tracing::debug!(name, count = self.items.len(), "item removed");
        Ok(removed)
    }

    /// All items in stored order.
    pub fn list(&self) -> DomainResult<&[Item]> {
        if self.items.is_empty() {
            return Err(DomainError::Empty);
        }
        Ok(&self.items)
    }

    /// Order the items by `key` and return the comparisons performed.
    ///
    /// Returns 0 without touching anything when that order already holds.
    pub fn sort(&mut self, key: SortKey) -> DomainResult<u64> {
        if self.items.len() < MIN_ITEMS_TO_SORT {
            return Err(DomainError::InsufficientItems {
                required: MIN_ITEMS_TO_SORT,
                actual: self.items.len(),
            });
        }
        Ok(self.ensure_sorted(key))
    }

    /// Look up an item by name.
    ///
    /// Puts the inventory in name order first if it is not already, so a call
    /// may reorder the stored items even when nothing is found.
    pub fn find_by_name(&mut self, name: &str) -> Option<&Item> {
        self.ensure_sorted(SortKey::Name);
        binary_search_by_name(&self.items, name).map(|index| &self.items[index])
    }

    pub(crate) fn ensure_sorted(&mut self, key: SortKey) -> u64 {
        if self.sort_key == Some(key) {
            return 0;
        }

        let comparisons = sort_items(&mut self.items, key);
        self.sort_key = Some(key);
        tracing::debug!(%key, comparisons, count = self.items.len(), "items sorted");
        comparisons
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    /// Make room for at least `required` items, growing 1.5x at a time.
    ///
    /// Storage is always reserved fallibly, so `push` never has to allocate.
    fn ensure_capacity(&mut self, required: usize) -> DomainResult<()> {
        if self.capacity >= required {
            // A clone only holds storage for its items; reclaim the rest.
            if self.items.capacity() < required {
                let target = self.capacity;
                if let Err(err) = self.items.try_reserve_exact(target - self.items.len()) {
                    tracing::warn!(requested = target, error = %err, "inventory reservation failed");
                    return Err(DomainError::allocation_failure(target));
                }
            }
            return Ok(());
        }

        let grown = self
            .capacity
            .checked_add(self.capacity >> 1)
            .ok_or_else(|| DomainError::allocation_failure(required))?;
        let new_capacity = grown.max(required);

        if let Err(err) = self
            .items
            .try_reserve_exact(new_capacity - self.items.len())
        {
            tracing::warn!(requested = new_capacity, error = %err, "inventory growth failed");
            return Err(DomainError::allocation_failure(new_capacity));
        }

        tracing::debug!(from = self.capacity, to = new_capacity, "inventory grown");
        self.capacity = new_capacity;
        Ok(())
    }
}

/// Reserve `capacity` slots, or none at all when the allocator refuses.
///
/// Returns the logical capacity to record.
fn reserve_or_empty(items: &mut Vec<Item>, capacity: usize) -> usize {
    match items.try_reserve_exact(capacity) {
        Ok(()) => capacity,
        Err(err) => {
            tracing::warn!(
                requested = capacity,
                error = %err,
                "initial reservation failed; starting with no reserved storage"
            );
            0
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
