//! Navigation tree repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{NavigationItem, NavigationTree, NavigationTreeSnapshot};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NavigationTreeRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<NavigationTree>, DomainError>;
    /// The tree and every item it references, read under one consistent view.
    async fn find_snapshot(&self, id: &Uuid) -> Result<Option<NavigationTreeSnapshot>, DomainError>;
    async fn find_by_shop_id(&self, shop_id: &str) -> Result<Vec<NavigationTree>, DomainError>;
    async fn create(&self, tree: &NavigationTree) -> Result<NavigationTree, DomainError>;
    async fn update(&self, tree: &NavigationTree) -> Result<NavigationTree, DomainError>;
    /// Stores the published tree and all of its promoted items as a single write.
    /// Readers see either the state before or after, never a mix.
    async fn publish(
        &self,
        tree: &NavigationTree,
        items: &[NavigationItem],
    ) -> Result<NavigationTree, DomainError>;
}
