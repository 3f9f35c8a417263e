// ============================================================================
// Navigation Infrastructure - Navigation Tree Repository
// File: crates/nav-infrastructure/src/store/memory/tree_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use nav_core::domain::{NavigationItem, NavigationTree, NavigationTreeSnapshot};
use nav_core::error::DomainError;
use nav_core::repositories::NavigationTreeRepository;

use super::store::InMemoryNavigationStore;

#[async_trait]
impl NavigationTreeRepository for InMemoryNavigationStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<NavigationTree>, DomainError> {
        Ok(self.state.read().trees.get(id).cloned())
    }

    async fn find_snapshot(&self, id: &Uuid) -> Result<Option<NavigationTreeSnapshot>, DomainError> {
        let state = self.state.read();
        let Some(tree) = state.trees.get(id) else {
            return Ok(None);
        };

        let items = tree
            .referenced_item_ids()
            .iter()
            .filter_map(|item_id| state.items.get(item_id).cloned())
            .collect();

        Ok(Some(NavigationTreeSnapshot {
            tree: tree.clone(),
            items,
        }))
    }

    async fn find_by_shop_id(&self, shop_id: &str) -> Result<Vec<NavigationTree>, DomainError> {
        let state = self.state.read();
        Ok(state
            .trees
            .values()
            .filter(|tree| tree.belongs_to(shop_id))
            .cloned()
            .collect())
    }

    async fn create(&self, tree: &NavigationTree) -> Result<NavigationTree, DomainError> {
        let mut state = self.state.write();
        if state.trees.contains_key(&tree.id) {
            error!("Navigation tree id collision: {}", tree.id);
            return Err(DomainError::StorageError(format!(
                "Navigation tree already exists: {}",
                tree.id
            )));
        }

        state.trees.insert(tree.id, tree.clone());
        Ok(tree.clone())
    }

    async fn update(&self, tree: &NavigationTree) -> Result<NavigationTree, DomainError> {
        let mut state = self.state.write();
        match state.trees.get_mut(&tree.id) {
            Some(stored) => {
                *stored = tree.clone();
                Ok(tree.clone())
            }
            None => Err(DomainError::NavigationTreeNotFound(tree.id)),
        }
    }

    async fn publish(
        &self,
        tree: &NavigationTree,
        items: &[NavigationItem],
    ) -> Result<NavigationTree, DomainError> {
        let mut state = self.state.write();

        // Check everything before touching anything
        if !state.trees.contains_key(&tree.id) {
            return Err(DomainError::NavigationTreeNotFound(tree.id));
        }
        if let Some(missing) = items.iter().find(|item| !state.items.contains_key(&item.id)) {
            return Err(DomainError::NavigationItemNotFound(missing.id));
        }

        for item in items {
            state.items.insert(item.id, item.clone());
        }
        state.trees.insert(tree.id, tree.clone());

        info!("Published tree {} with {} items", tree.id, items.len());
        Ok(tree.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_core::domain::NavigationTreeItem;
    use nav_core::repositories::NavigationItemRepository;

    async fn seeded() -> (InMemoryNavigationStore, NavigationItem, NavigationTree) {
        let store = InMemoryNavigationStore::new();
        let item = NavigationItem::new("shop-1".to_string(), None, None).unwrap();
        NavigationItemRepository::create(&store, &item).await.unwrap();
        let tree = NavigationTree::new(
            "shop-1".to_string(),
            "Main".to_string(),
            vec![NavigationTreeItem::new(item.id)],
        )
        .unwrap();
        NavigationTreeRepository::create(&store, &tree).await.unwrap();
        (store, item, tree)
    }

    #[tokio::test]
    async fn test_snapshot_includes_referenced_items() {
        let (store, item, tree) = seeded().await;
        let snapshot = store.find_snapshot(&tree.id).await.unwrap().unwrap();
        assert_eq!(snapshot.tree, tree);
        assert_eq!(snapshot.items, vec![item]);

        assert!(store.find_snapshot(&Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_publish_writes_tree_and_items() {
        let (store, mut item, mut tree) = seeded().await;
        tree.publish();
        item.publish();

        store.publish(&tree, &[item.clone()]).await.unwrap();

        let snapshot = store.find_snapshot(&tree.id).await.unwrap().unwrap();
        assert!(!snapshot.tree.has_unpublished_changes);
        assert_eq!(snapshot.tree.items, snapshot.tree.draft_items);
        assert!(snapshot.items[0].data.is_some());
    }

    #[tokio::test]
    async fn test_publish_with_missing_item_changes_nothing() {
        let (store, _item, tree) = seeded().await;
        let before = store.find_snapshot(&tree.id).await.unwrap().unwrap();

        let mut published = tree.clone();
        published.publish();
        let ghost = NavigationItem::new("shop-1".to_string(), None, None).unwrap();
        let result = store.publish(&published, &[ghost.clone()]).await;

        assert_eq!(result.unwrap_err(), DomainError::NavigationItemNotFound(ghost.id));
        let after = store.find_snapshot(&tree.id).await.unwrap().unwrap();
        assert_eq!(after.tree, before.tree);
        assert_eq!(store.item_count(), 1);
    }
}
