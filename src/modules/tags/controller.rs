use axum::extract::State;
use forumgate_rpc::pb::tag::{
    CreateTagRequest, DeleteTagRequest, DeleteTagResponse, GetAllTagsRequest, GetAllTagsResponse,
    GetPopularTagsRequest, GetPopularTagsResponse, GetTagRequest, Tag, UpdateTagRequest,
};

use crate::dispatch::binder::{by_id, json_body, json_body_with_id, listing};
use crate::dispatch::{Dispatched, Operation, RequestInput, dispatch};
use crate::state::AppState;

pub async fn create_tag(State(state): State<AppState>, input: RequestInput) -> Dispatched<Tag> {
    dispatch(
        &state,
        Operation::created("create_tag"),
        input,
        json_body::<CreateTagRequest>,
        |clients, ctx, req| async move { clients.tags.create_tag(&ctx, req).await },
    )
    .await
}

pub async fn get_tag(State(state): State<AppState>, input: RequestInput) -> Dispatched<Tag> {
    dispatch(
        &state,
        Operation::ok("get_tag"),
        input,
        by_id::<GetTagRequest>,
        |clients, ctx, req| async move { clients.tags.get_tag(&ctx, req).await },
    )
    .await
}

pub async fn update_tag(State(state): State<AppState>, input: RequestInput) -> Dispatched<Tag> {
    dispatch(
        &state,
        Operation::ok("update_tag"),
        input,
        json_body_with_id::<UpdateTagRequest>,
        |clients, ctx, req| async move { clients.tags.update_tag(&ctx, req).await },
    )
    .await
}

pub async fn delete_tag(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<DeleteTagResponse> {
    dispatch(
        &state,
        Operation::ok("delete_tag"),
        input,
        by_id::<DeleteTagRequest>,
        |clients, ctx, req| async move { clients.tags.delete_tag(&ctx, req).await },
    )
    .await
}

pub async fn get_all_tags(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<GetAllTagsResponse> {
    dispatch(
        &state,
        Operation::ok("get_all_tags"),
        input,
        listing::<GetAllTagsRequest>,
        |clients, ctx, req| async move { clients.tags.get_all_tags(&ctx, req).await },
    )
    .await
}

/// Most-used tags first.
pub async fn get_popular_tags(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<GetPopularTagsResponse> {
    dispatch(
        &state,
        Operation::ok("get_popular_tags"),
        input,
        listing::<GetPopularTagsRequest>,
        |clients, ctx, req| async move { clients.tags.get_popular_tags(&ctx, req).await },
    )
    .await
}
