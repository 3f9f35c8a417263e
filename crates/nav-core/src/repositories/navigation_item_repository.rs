//! Navigation item repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::NavigationItem;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NavigationItemRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<NavigationItem>, DomainError>;
    /// Missing ids are skipped, not reported.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<NavigationItem>, DomainError>;
    async fn find_by_shop_id(&self, shop_id: &str) -> Result<Vec<NavigationItem>, DomainError>;
    async fn create(&self, item: &NavigationItem) -> Result<NavigationItem, DomainError>;
    async fn update(&self, item: &NavigationItem) -> Result<NavigationItem, DomainError>;
    /// Returns the removed document, or `None` if there was nothing to remove.
    async fn delete(&self, id: &Uuid) -> Result<Option<NavigationItem>, DomainError>;
}
