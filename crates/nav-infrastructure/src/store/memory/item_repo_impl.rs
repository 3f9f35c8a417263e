// ============================================================================
// Navigation Infrastructure - Navigation Item Repository
// File: crates/nav-infrastructure/src/store/memory/item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use nav_core::domain::NavigationItem;
use nav_core::error::DomainError;
use nav_core::repositories::NavigationItemRepository;

use super::store::InMemoryNavigationStore;

#[async_trait]
impl NavigationItemRepository for InMemoryNavigationStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<NavigationItem>, DomainError> {
        Ok(self.state.read().items.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<NavigationItem>, DomainError> {
        let state = self.state.read();
        Ok(ids.iter().filter_map(|id| state.items.get(id).cloned()).collect())
    }

    async fn find_by_shop_id(&self, shop_id: &str) -> Result<Vec<NavigationItem>, DomainError> {
        let state = self.state.read();
        let items: Vec<NavigationItem> = state
            .items
            .values()
            .filter(|item| item.belongs_to(shop_id))
            .cloned()
            .collect();

        debug!("Found {} navigation items for shop {}", items.len(), shop_id);
        Ok(items)
    }

    async fn create(&self, item: &NavigationItem) -> Result<NavigationItem, DomainError> {
        let mut state = self.state.write();
        if state.items.contains_key(&item.id) {
            error!("Navigation item id collision: {}", item.id);
            return Err(DomainError::StorageError(format!(
                "Navigation item already exists: {}",
                item.id
            )));
        }

        state.items.insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn update(&self, item: &NavigationItem) -> Result<NavigationItem, DomainError> {
        let mut state = self.state.write();
        match state.items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(item.clone())
            }
            None => Err(DomainError::NavigationItemNotFound(item.id)),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<NavigationItem>, DomainError> {
        Ok(self.state.write().items.remove(id))
    }
}
