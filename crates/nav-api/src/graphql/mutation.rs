//! Mutation root

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use nav_core::services::{DynNavigationService, NavigationTreeUpdate, NewNavigationTree};
use nav_shared::parse_id;

use super::error::{coded_error, graphql_error, NOT_FOUND};
use super::inputs::{
    CreateNavigationItemInput, CreateNavigationTreeInput, DeleteNavigationItemInput,
    PublishNavigationChangesInput, UpdateNavigationItemInput, UpdateNavigationTreeInput,
};
use super::types::{
    CreateNavigationItemPayload, CreateNavigationTreePayload, DeleteNavigationItemPayload,
    NavigationItem, NavigationTree, PublishNavigationChangesPayload, UpdateNavigationItemPayload,
    UpdateNavigationTreePayload,
};

/// An id that cannot be parsed names nothing we store.
fn entity_id(id: &ID, kind: &str) -> Result<Uuid> {
    parse_id(id).ok_or_else(|| coded_error(format!("{} not found: {}", kind, id.0), NOT_FOUND))
}

fn service<'a>(ctx: &'a Context<'_>) -> Result<&'a Arc<DynNavigationService>> {
    ctx.data::<Arc<DynNavigationService>>()
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new navigation item
    async fn create_navigation_item(
        &self,
        ctx: &Context<'_>,
        input: CreateNavigationItemInput,
    ) -> Result<CreateNavigationItemPayload> {
        let item = service(ctx)?
            .create_navigation_item(input.navigation_item.into())
            .await
            .map_err(graphql_error)?;

        Ok(CreateNavigationItemPayload {
            client_mutation_id: input.client_mutation_id,
            navigation_item: Some(NavigationItem::new(item, None)),
        })
    }

    /// Update an existing navigation item's draft
    async fn update_navigation_item(
        &self,
        ctx: &Context<'_>,
        input: UpdateNavigationItemInput,
    ) -> Result<UpdateNavigationItemPayload> {
        let id = entity_id(&input.id, "Navigation item")?;
        let item = service(ctx)?
            .update_navigation_item(&id, input.navigation_item.into())
            .await
            .map_err(graphql_error)?;

        Ok(UpdateNavigationItemPayload {
            client_mutation_id: input.client_mutation_id,
            navigation_item: Some(NavigationItem::new(item, None)),
        })
    }

    /// Delete a navigation item that no tree uses anymore
    async fn delete_navigation_item(
        &self,
        ctx: &Context<'_>,
        input: DeleteNavigationItemInput,
    ) -> Result<DeleteNavigationItemPayload> {
        let id = entity_id(&input.id, "Navigation item")?;
        let item = service(ctx)?
            .delete_navigation_item(&id, input.shop_id.as_ref().map(|id| id.as_str()))
            .await
            .map_err(graphql_error)?;

        Ok(DeleteNavigationItemPayload {
            client_mutation_id: input.client_mutation_id,
            navigation_item: Some(NavigationItem::new(item, None)),
        })
    }

    /// Create a new navigation tree
    async fn create_navigation_tree(
        &self,
        ctx: &Context<'_>,
        input: CreateNavigationTreeInput,
    ) -> Result<CreateNavigationTreePayload> {
        let client_mutation_id = input.client_mutation_id.clone();
        let new_tree = NewNavigationTree::try_from(input).map_err(graphql_error)?;
        let tree = service(ctx)?
            .create_navigation_tree(new_tree)
            .await
            .map_err(graphql_error)?;

        Ok(CreateNavigationTreePayload {
            client_mutation_id,
            navigation_tree: Some(NavigationTree::new(tree)),
        })
    }

    /// Update an existing navigation tree's draft items and/or name
    async fn update_navigation_tree(
        &self,
        ctx: &Context<'_>,
        input: UpdateNavigationTreeInput,
    ) -> Result<UpdateNavigationTreePayload> {
        let id = entity_id(&input.id, "Navigation tree")?;
        let client_mutation_id = input.client_mutation_id.clone();
        let update = NavigationTreeUpdate::try_from(input).map_err(graphql_error)?;
        let tree = service(ctx)?
            .update_navigation_tree(&id, update)
            .await
            .map_err(graphql_error)?;

        Ok(UpdateNavigationTreePayload {
            client_mutation_id,
            navigation_tree: Some(NavigationTree::new(tree)),
        })
    }

    /// Publish the draft structure of a navigation tree and the drafts of every item in it
    async fn publish_navigation_changes(
        &self,
        ctx: &Context<'_>,
        input: PublishNavigationChangesInput,
    ) -> Result<PublishNavigationChangesPayload> {
        let id = entity_id(&input.id, "Navigation tree")?;
        let tree = service(ctx)?
            .publish_navigation_changes(&id, input.shop_id.as_ref().map(|id| id.as_str()))
            .await
            .map_err(graphql_error)?;

        Ok(PublishNavigationChangesPayload {
            client_mutation_id: input.client_mutation_id,
            navigation_tree: Some(NavigationTree::new(tree)),
        })
    }
}
