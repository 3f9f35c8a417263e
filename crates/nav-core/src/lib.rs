//! # Navigation Core
//! 
//! Domain entities, pagination, services, and repository traits for navigation trees.

pub mod domain;
pub mod pagination;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
