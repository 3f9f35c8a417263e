//! Mapping of domain failures to GraphQL errors

use async_graphql::{Error, ErrorExtensions};
use tracing::{error, warn};

use nav_core::DomainError;

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CONFLICT: &str = "CONFLICT";
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// Error with `extensions.code` set
pub fn coded_error(message: impl Into<String>, code: &'static str) -> Error {
    Error::new(message).extend_with(|_, extensions| extensions.set("code", code))
}

pub fn graphql_error(err: DomainError) -> Error {
    let code = match &err {
        DomainError::NavigationItemNotFound(_) | DomainError::NavigationTreeNotFound(_) => NOT_FOUND,
        DomainError::ShopMismatch { .. }
        | DomainError::DuplicateContentLanguage(_)
        | DomainError::EmptyContentLanguage
        | DomainError::CyclicTreeReference(_)
        | DomainError::TreeTooDeep { .. }
        | DomainError::ValidationError(_) => {
            warn!("Validation failed: {}", err);
            VALIDATION_ERROR
        }
        DomainError::NavigationItemReferenced { .. } => {
            warn!("Conflict: {}", err);
            CONFLICT
        }
        DomainError::InvalidCursor(_) | DomainError::InvalidPagination(_) => BAD_USER_INPUT,
        DomainError::StorageError(_) => {
            error!("Internal error: {}", err);
            INTERNAL_SERVER_ERROR
        }
    };
    coded_error(err.to_string(), code)
}
