//! Definition of the GraphQL API.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use nav_core::services::DynNavigationService;
use nav_shared::config::GraphqlSettings;

pub mod error;
pub mod inputs;
pub mod mutation;
pub mod query;
pub mod scalars;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// Type of our API schema.
pub type NavigationSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Creates the schema with the service available to every resolver.
pub fn build_schema(service: Arc<DynNavigationService>, settings: &GraphqlSettings) -> NavigationSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .limit_depth(settings.max_query_depth)
        .limit_complexity(settings.max_query_complexity);
    if !settings.introspection {
        builder = builder.disable_introspection();
    }
    builder.finish()
}
