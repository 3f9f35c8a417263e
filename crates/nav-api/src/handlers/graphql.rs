// ============================================================================
// Navigation API - GraphQL Handlers
// File: crates/nav-api/src/handlers/graphql.rs
// ============================================================================
//! GraphQL endpoint and GraphiQL IDE

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::state::AppState;

/// GraphQL handler - POST {graphql.path}
pub async fn graphql_handler(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

/// GraphiQL IDE - GET {graphql.path}. Only served when the playground is enabled.
pub async fn graphiql(State(state): State<AppState>) -> Response {
    if !state.config.graphql.playground {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(GraphiQLSource::build().endpoint(&state.config.graphql.path).finish()).into_response()
}
