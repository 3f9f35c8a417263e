// ============================================================================
// Navigation Core - Navigation Tree Entity
// File: crates/nav-core/src/domain/navigation_tree.rs
// Description: Ordered hierarchy of navigation items with draft/published sides
// ============================================================================

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use nav_shared::{new_id, EntityId, ShopId};

use crate::domain::NavigationItem;
use crate::error::DomainError;

/// A node of a navigation tree. References its item by id; children are owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTreeItem {
    pub navigation_item_id: EntityId,
    pub expanded: bool,
    pub is_private: bool,
    pub is_secondary: bool,
    pub is_visible: bool,
    pub items: Vec<NavigationTreeItem>,
}

impl NavigationTreeItem {
    pub fn new(navigation_item_id: EntityId) -> Self {
        Self {
            navigation_item_id,
            expanded: false,
            is_private: false,
            is_secondary: false,
            is_visible: true,
            items: Vec::new(),
        }
    }

    pub fn with_children(mut self, items: Vec<NavigationTreeItem>) -> Self {
        self.items = items;
        self
    }

    pub fn secondary(mut self) -> Self {
        self.is_secondary = true;
        self
    }

    /// Pre-order walk over a forest of nodes
    pub fn walk<'a>(items: &'a [NavigationTreeItem], visit: &mut impl FnMut(&'a NavigationTreeItem)) {
        for item in items {
            visit(item);
            Self::walk(&item.items, visit);
        }
    }

    /// Every item id referenced anywhere in the forest, deduplicated
    pub fn referenced_ids(items: &[NavigationTreeItem]) -> BTreeSet<EntityId> {
        let mut ids = BTreeSet::new();
        Self::walk(items, &mut |node| {
            ids.insert(node.navigation_item_id);
        });
        ids
    }

    /// Drops secondary nodes together with their subtrees.
    pub fn without_secondary(items: &[NavigationTreeItem]) -> Vec<NavigationTreeItem> {
        items
            .iter()
            .filter(|node| !node.is_secondary)
            .map(|node| NavigationTreeItem {
                items: Self::without_secondary(&node.items),
                ..node.clone()
            })
            .collect()
    }

    /// Rejects an item nested under itself and forests deeper than `max_depth`.
    pub fn check_structure(items: &[NavigationTreeItem], max_depth: usize) -> Result<(), DomainError> {
        let mut ancestors = Vec::new();
        Self::check_level(items, &mut ancestors, max_depth)
    }

    fn check_level(
        items: &[NavigationTreeItem],
        ancestors: &mut Vec<EntityId>,
        max_depth: usize,
    ) -> Result<(), DomainError> {
        if items.is_empty() {
            return Ok(());
        }
        if ancestors.len() >= max_depth {
            return Err(DomainError::TreeTooDeep { max: max_depth });
        }

        for node in items {
            if ancestors.contains(&node.navigation_item_id) {
                return Err(DomainError::CyclicTreeReference(node.navigation_item_id));
            }
            ancestors.push(node.navigation_item_id);
            let result = Self::check_level(&node.items, ancestors, max_depth);
            ancestors.pop();
            result?;
        }
        Ok(())
    }
}

/// Navigation Tree entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NavigationTree {
    pub id: EntityId,
    pub shop_id: ShopId,

    #[validate(length(min = 1, max = 255, message = "Tree name must be between 1 and 255 characters"))]
    pub name: String,

    pub items: Vec<NavigationTreeItem>,
    pub draft_items: Vec<NavigationTreeItem>,
    pub has_unpublished_changes: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl NavigationTree {
    pub fn new(
        shop_id: ShopId,
        name: String,
        draft_items: Vec<NavigationTreeItem>,
    ) -> Result<Self, DomainError> {
        let shop_id = shop_id.trim().to_string();
        if shop_id.is_empty() {
            return Err(DomainError::ValidationError("Shop id is required".to_string()));
        }

        let tree = Self {
            id: new_id(),
            shop_id,
            name: name.trim().to_string(),
            items: Vec::new(),
            has_unpublished_changes: !draft_items.is_empty(),
            draft_items,
            created_at: Utc::now(),
            modified_at: None,
        };

        tree.validate()?;
        Ok(tree)
    }

    /// Renames and/or replaces the draft structure. Structure checks belong to the caller,
    /// which knows the referenced items.
    pub fn apply_draft_update(
        &mut self,
        name: Option<String>,
        draft_items: Option<Vec<NavigationTreeItem>>,
    ) -> Result<(), DomainError> {
        let mut next = self.clone();
        if let Some(name) = name {
            next.name = name.trim().to_string();
        }
        if let Some(draft_items) = draft_items {
            next.draft_items = draft_items;
        }
        next.validate()?;

        next.has_unpublished_changes = true;
        next.modified_at = Some(Utc::now());
        *self = next;
        Ok(())
    }

    pub fn publish(&mut self) {
        self.items = self.draft_items.clone();
        self.has_unpublished_changes = false;
        self.modified_at = Some(Utc::now());
    }

    pub fn belongs_to(&self, shop_id: &str) -> bool {
        self.shop_id == shop_id
    }

    pub fn references_item(&self, item_id: &Uuid) -> bool {
        let mut found = false;
        let mut visit = |node: &NavigationTreeItem| found |= node.navigation_item_id == *item_id;
        NavigationTreeItem::walk(&self.items, &mut visit);
        NavigationTreeItem::walk(&self.draft_items, &mut visit);
        found
    }

    /// Ids referenced from either side of the tree
    pub fn referenced_item_ids(&self) -> BTreeSet<EntityId> {
        let mut ids = NavigationTreeItem::referenced_ids(&self.items);
        ids.extend(NavigationTreeItem::referenced_ids(&self.draft_items));
        ids
    }

    pub fn without_secondary(mut self) -> Self {
        self.items = NavigationTreeItem::without_secondary(&self.items);
        self.draft_items = NavigationTreeItem::without_secondary(&self.draft_items);
        self
    }
}

/// A tree together with every item it references, read in one consistent view
#[derive(Debug, Clone)]
pub struct NavigationTreeSnapshot {
    pub tree: NavigationTree,
    pub items: Vec<NavigationItem>,
}
