// ============================================================================
// Navigation Infrastructure - In-Memory Document Store
// File: crates/nav-infrastructure/src/store/memory/store.rs
// ============================================================================

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use nav_core::domain::{NavigationItem, NavigationTree};

/// Documents held by the store. Both collections sit behind one lock so a
/// multi-document write is never observed half-applied.
#[derive(Debug, Default)]
pub(super) struct StoreState {
    pub items: HashMap<Uuid, NavigationItem>,
    pub trees: HashMap<Uuid, NavigationTree>,
}

/// Document store for navigation items and trees.
///
/// Implements both repository ports; share one `Arc` of it between them.
#[derive(Debug, Default)]
pub struct InMemoryNavigationStore {
    pub(super) state: RwLock<StoreState>,
}

impl InMemoryNavigationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> usize {
        self.state.read().items.len()
    }

    pub fn tree_count(&self) -> usize {
        self.state.read().trees.len()
    }
}
