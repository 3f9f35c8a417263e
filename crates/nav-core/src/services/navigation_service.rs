// ============================================================================
// Navigation Core - Navigation Service
// File: crates/nav-core/src/services/navigation_service.rs
// ============================================================================
//! Reads and edits navigation items and trees, and publishes draft state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use nav_shared::config::NavigationSettings;
use nav_shared::ShopId;

use crate::domain::{
    Metadata, NavigationItem, NavigationItemData, NavigationTree, NavigationTreeItem,
    NavigationTreeSnapshot,
};
use crate::error::DomainError;
use crate::pagination::{self, Page, PageRequest};
use crate::repositories::{NavigationItemRepository, NavigationTreeRepository};

/// Service over trait objects, as handed to the API layer
pub type DynNavigationService =
    NavigationService<dyn NavigationItemRepository, dyn NavigationTreeRepository>;

/// Navigation service for item and tree editing flows
///
/// Mutations are serialised through `write_lock` so that validation and the
/// following write observe the same stored state.
pub struct NavigationService<I: ?Sized, T: ?Sized> {
    item_repo: Arc<I>,
    tree_repo: Arc<T>,
    settings: NavigationSettings,
    write_lock: Mutex<()>,
}

impl<I, T> NavigationService<I, T>
where
    I: NavigationItemRepository + ?Sized,
    T: NavigationTreeRepository + ?Sized,
{
    pub fn new(item_repo: Arc<I>, tree_repo: Arc<T>, settings: NavigationSettings) -> Self {
        Self {
            item_repo,
            tree_repo,
            settings,
            write_lock: Mutex::new(()),
        }
    }

    /// Fetch a tree for display. A missing tree, or one outside `shop_id`, is `None`.
    pub async fn navigation_tree_by_id(
        &self,
        id: &Uuid,
        language: &str,
        shop_id: Option<&str>,
        should_include_secondary: bool,
    ) -> Result<Option<ResolvedNavigationTree>, DomainError> {
        let Some(mut snapshot) = self.tree_repo.find_snapshot(id).await? else {
            debug!("Navigation tree not found: {}", id);
            return Ok(None);
        };
        if !in_scope(shop_id, &snapshot.tree.shop_id) {
            debug!("Navigation tree {} is not part of shop {:?}", id, shop_id);
            return Ok(None);
        }

        if !should_include_secondary {
            snapshot.tree = snapshot.tree.without_secondary();
        }

        Ok(Some(ResolvedNavigationTree::new(snapshot, Some(language.to_string()))))
    }

    /// One page of a shop's items
    pub async fn navigation_items_by_shop_id(
        &self,
        shop_id: &str,
        request: &PageRequest,
    ) -> Result<Page<NavigationItem>, DomainError> {
        let items = self.item_repo.find_by_shop_id(shop_id.trim()).await?;
        pagination::paginate(items, request, &self.settings)
    }

    pub async fn create_navigation_item(
        &self,
        input: NewNavigationItem,
    ) -> Result<NavigationItem, DomainError> {
        let _guard = self.write_lock.lock().await;

        let item = NavigationItem::new(input.shop_id, input.draft_data, input.metadata)?;
        let created = self.item_repo.create(&item).await?;

        info!("Navigation item created: {} (shop {})", created.id, created.shop_id);
        Ok(created)
    }

    pub async fn update_navigation_item(
        &self,
        id: &Uuid,
        input: NavigationItemUpdate,
    ) -> Result<NavigationItem, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut item = self.load_item(id, input.shop_id.as_deref()).await?;
        item.apply_draft_update(input.draft_data, input.metadata)?;
        let updated = self.item_repo.update(&item).await?;

        info!("Navigation item draft updated: {}", updated.id);
        Ok(updated)
    }

    /// Removes an item and returns its last state. Fails while any tree still places the item.
    pub async fn delete_navigation_item(
        &self,
        id: &Uuid,
        shop_id: Option<&str>,
    ) -> Result<NavigationItem, DomainError> {
        let _guard = self.write_lock.lock().await;

        let item = self.load_item(id, shop_id).await?;
        let trees = self.tree_repo.find_by_shop_id(&item.shop_id).await?;
        if let Some(tree) = trees.iter().find(|tree| tree.references_item(id)) {
            warn!("Refusing to delete navigation item {}: used by tree {}", id, tree.id);
            return Err(DomainError::NavigationItemReferenced {
                item_id: *id,
                tree_id: tree.id,
            });
        }

        let deleted = self
            .item_repo
            .delete(id)
            .await?
            .ok_or(DomainError::NavigationItemNotFound(*id))?;

        info!("Navigation item deleted: {}", deleted.id);
        Ok(deleted)
    }

    pub async fn create_navigation_tree(
        &self,
        input: NewNavigationTree,
    ) -> Result<ResolvedNavigationTree, DomainError> {
        let _guard = self.write_lock.lock().await;

        NavigationTreeItem::check_structure(&input.draft_items, self.settings.max_tree_depth)?;
        let tree = NavigationTree::new(input.shop_id, input.name, input.draft_items)?;
        self.verify_references(&tree.shop_id, &tree.draft_items).await?;

        let created = self.tree_repo.create(&tree).await?;
        info!("Navigation tree created: {} (shop {})", created.id, created.shop_id);

        self.resolve(&created.id).await
    }

    pub async fn update_navigation_tree(
        &self,
        id: &Uuid,
        input: NavigationTreeUpdate,
    ) -> Result<ResolvedNavigationTree, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut tree = self.load_tree(id, input.shop_id.as_deref()).await?;
        if let Some(draft_items) = input.draft_items.as_deref() {
            NavigationTreeItem::check_structure(draft_items, self.settings.max_tree_depth)?;
            self.verify_references(&tree.shop_id, draft_items).await?;
        }
        tree.apply_draft_update(input.name, input.draft_items)?;

        let updated = self.tree_repo.update(&tree).await?;
        info!("Navigation tree draft updated: {}", updated.id);

        self.resolve(&updated.id).await
    }

    /// Promote the draft side of a tree and of every item placed in it.
    pub async fn publish_navigation_changes(
        &self,
        id: &Uuid,
        shop_id: Option<&str>,
    ) -> Result<ResolvedNavigationTree, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut tree = self.load_tree(id, shop_id).await?;
        let ids: Vec<Uuid> = NavigationTreeItem::referenced_ids(&tree.draft_items)
            .into_iter()
            .collect();
        let mut items = if ids.is_empty() {
            Vec::new()
        } else {
            self.item_repo.find_by_ids(&ids).await?
        };
        if let Some(missing) = ids
            .iter()
            .find(|wanted| !items.iter().any(|item| item.id == **wanted))
        {
            warn!("Cannot publish tree {}: item {} no longer exists", tree.id, missing);
            return Err(DomainError::NavigationItemNotFound(*missing));
        }

        tree.publish();
        for item in items.iter_mut() {
            item.publish();
        }
        let published = self.tree_repo.publish(&tree, &items).await?;

        info!(
            "Navigation tree published: {} ({} items promoted)",
            published.id,
            items.len()
        );
        Ok(ResolvedNavigationTree::new(
            NavigationTreeSnapshot {
                tree: published,
                items,
            },
            None,
        ))
    }

    async fn load_item(&self, id: &Uuid, shop_id: Option<&str>) -> Result<NavigationItem, DomainError> {
        self.item_repo
            .find_by_id(id)
            .await?
            .filter(|item| in_scope(shop_id, &item.shop_id))
            .ok_or(DomainError::NavigationItemNotFound(*id))
    }

    async fn load_tree(&self, id: &Uuid, shop_id: Option<&str>) -> Result<NavigationTree, DomainError> {
        self.tree_repo
            .find_by_id(id)
            .await?
            .filter(|tree| in_scope(shop_id, &tree.shop_id))
            .ok_or(DomainError::NavigationTreeNotFound(*id))
    }

    async fn resolve(&self, id: &Uuid) -> Result<ResolvedNavigationTree, DomainError> {
        let snapshot = self
            .tree_repo
            .find_snapshot(id)
            .await?
            .ok_or(DomainError::NavigationTreeNotFound(*id))?;
        Ok(ResolvedNavigationTree::new(snapshot, None))
    }

    /// Every referenced item must exist and belong to the tree's shop.
    async fn verify_references(
        &self,
        shop_id: &str,
        draft_items: &[NavigationTreeItem],
    ) -> Result<(), DomainError> {
        let ids: Vec<Uuid> = NavigationTreeItem::referenced_ids(draft_items)
            .into_iter()
            .collect();
        if ids.is_empty() {
            return Ok(());
        }

        let found = self.item_repo.find_by_ids(&ids).await?;
        let by_id: HashMap<Uuid, &NavigationItem> = found.iter().map(|item| (item.id, item)).collect();
        for id in &ids {
            match by_id.get(id) {
                None => return Err(DomainError::NavigationItemNotFound(*id)),
                Some(item) if !item.belongs_to(shop_id) => {
                    return Err(DomainError::ShopMismatch {
                        item_id: *id,
                        item_shop_id: item.shop_id.clone(),
                        shop_id: shop_id.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Shop ids are stored trimmed, so requested ids are compared the same way.
fn in_scope(shop_id: Option<&str>, owner: &str) -> bool {
    shop_id.map_or(true, |shop_id| shop_id.trim() == owner)
}

/// Input for creating an item
#[derive(Debug, Clone, Default)]
pub struct NewNavigationItem {
    pub shop_id: ShopId,
    pub draft_data: Option<NavigationItemData>,
    pub metadata: Option<Metadata>,
}

/// Draft-side changes to an item. `shop_id`, when set, scopes the lookup.
#[derive(Debug, Clone, Default)]
pub struct NavigationItemUpdate {
    pub shop_id: Option<ShopId>,
    pub draft_data: Option<NavigationItemData>,
    pub metadata: Option<Metadata>,
}

/// Input for creating a tree
#[derive(Debug, Clone, Default)]
pub struct NewNavigationTree {
    pub shop_id: ShopId,
    pub name: String,
    pub draft_items: Vec<NavigationTreeItem>,
}

/// Draft-side changes to a tree. `shop_id`, when set, scopes the lookup.
#[derive(Debug, Clone, Default)]
pub struct NavigationTreeUpdate {
    pub shop_id: Option<ShopId>,
    pub name: Option<String>,
    pub draft_items: Option<Vec<NavigationTreeItem>>,
}

/// A tree with its referenced items looked up, ready for rendering
#[derive(Debug, Clone)]
pub struct ResolvedNavigationTree {
    pub tree: NavigationTree,
    pub items: HashMap<Uuid, NavigationItem>,
    /// Language requested by the reader, used for `contentForLanguage`
    pub language: Option<String>,
}

impl ResolvedNavigationTree {
    pub fn new(snapshot: NavigationTreeSnapshot, language: Option<String>) -> Self {
        Self {
            tree: snapshot.tree,
            items: snapshot.items.into_iter().map(|item| (item.id, item)).collect(),
            language,
        }
    }

    pub fn item(&self, id: &Uuid) -> Option<&NavigationItem> {
        self.items.get(id)
    }
}
