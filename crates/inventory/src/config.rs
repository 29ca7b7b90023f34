//! Inventory configuration.

use serde::{Deserialize, Serialize};

/// Initial storage reserved by a fresh inventory, in items.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Settings for building an [`Inventory`](crate::Inventory).
///
/// The core reads no environment; an embedding layer can deserialize this from
/// whatever source it likes. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Items reserved up front. Growth past this is 1.5x at a time.
    pub initial_capacity: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl InventoryConfig {
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}
