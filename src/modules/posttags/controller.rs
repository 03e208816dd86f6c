use axum::extract::State;
use forumgate_rpc::pb::posttag::{
    CreatePostTagRequest, DeletePostTagResponse, GetAllPostTagsRequest, GetAllPostTagsResponse,
    GetPostsByTagRequest, GetPostsByTagResponse, PostTag,
};

use super::model::{bind_delete, bind_get, bind_update};
use crate::dispatch::binder::{json_body, listing, listing_by_id};
use crate::dispatch::{Dispatched, Operation, RequestInput, dispatch};
use crate::state::AppState;

pub async fn create_post_tag(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<PostTag> {
    dispatch(
        &state,
        Operation::created("create_post_tag"),
        input,
        json_body::<CreatePostTagRequest>,
        |clients, ctx, req| async move { clients.post_tags.create_post_tag(&ctx, req).await },
    )
    .await
}

pub async fn get_post_tag(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<PostTag> {
    dispatch(
        &state,
        Operation::ok("get_post_tag"),
        input,
        bind_get,
        |clients, ctx, req| async move { clients.post_tags.get_post_tag(&ctx, req).await },
    )
    .await
}

pub async fn update_post_tag(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<PostTag> {
    dispatch(
        &state,
        Operation::ok("update_post_tag"),
        input,
        bind_update,
        |clients, ctx, req| async move { clients.post_tags.update_post_tag(&ctx, req).await },
    )
    .await
}

pub async fn delete_post_tag(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<DeletePostTagResponse> {
    dispatch(
        &state,
        Operation::ok("delete_post_tag"),
        input,
        bind_delete,
        |clients, ctx, req| async move { clients.post_tags.delete_post_tag(&ctx, req).await },
    )
    .await
}

pub async fn get_all_post_tags(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<GetAllPostTagsResponse> {
    dispatch(
        &state,
        Operation::ok("get_all_post_tags"),
        input,
        listing::<GetAllPostTagsRequest>,
        |clients, ctx, req| async move { clients.post_tags.get_all_post_tags(&ctx, req).await },
    )
    .await
}

pub async fn get_posts_by_tag(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<GetPostsByTagResponse> {
    dispatch(
        &state,
        Operation::ok("get_posts_by_tag"),
        input,
        listing_by_id::<GetPostsByTagRequest>,
        |clients, ctx, req| async move { clients.post_tags.get_posts_by_tag(&ctx, req).await },
    )
    .await
}
