//! # Navigation API
//! 
//! GraphQL schema, HTTP handlers, and router for the navigation service.

pub mod graphql;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use graphql::{build_schema, NavigationSchema};
pub use router::build_router;
pub use state::AppState;
