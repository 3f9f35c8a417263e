//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Navigation item not found: {0}")]
    NavigationItemNotFound(Uuid),

    #[error("Navigation tree not found: {0}")]
    NavigationTreeNotFound(Uuid),

    #[error("Navigation item {item_id} belongs to shop {item_shop_id}, not {shop_id}")]
    ShopMismatch { item_id: Uuid, item_shop_id: String, shop_id: String },

    #[error("Duplicate content for language: {0}")]
    DuplicateContentLanguage(String),

    #[error("Content language must not be empty")]
    EmptyContentLanguage,

    #[error("Navigation item {0} appears inside its own subtree")]
    CyclicTreeReference(Uuid),

    #[error("Navigation tree exceeds maximum depth of {max}")]
    TreeTooDeep { max: usize },

    #[error("Navigation item {item_id} is still referenced by navigation tree {tree_id}")]
    NavigationItemReferenced { item_id: Uuid, tree_id: Uuid },

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
