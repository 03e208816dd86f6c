use axum::extract::State;
use forumgate_rpc::pb::post::{
    CreatePostRequest, DeletePostRequest, DeletePostResponse, GetAllPostsRequest,
    GetAllPostsResponse, GetPostRequest, Post, UpdatePostRequest,
};

use crate::dispatch::binder::{by_id, json_body, json_body_with_id, listing};
use crate::dispatch::{Dispatched, Operation, RequestInput, dispatch};
use crate::state::AppState;

pub async fn create_post(State(state): State<AppState>, input: RequestInput) -> Dispatched<Post> {
    dispatch(
        &state,
        Operation::created("create_post"),
        input,
        json_body::<CreatePostRequest>,
        |clients, ctx, req| async move { clients.posts.create_post(&ctx, req).await },
    )
    .await
}

pub async fn get_post(State(state): State<AppState>, input: RequestInput) -> Dispatched<Post> {
    dispatch(
        &state,
        Operation::ok("get_post"),
        input,
        by_id::<GetPostRequest>,
        |clients, ctx, req| async move { clients.posts.get_post(&ctx, req).await },
    )
    .await
}

pub async fn update_post(State(state): State<AppState>, input: RequestInput) -> Dispatched<Post> {
    dispatch(
        &state,
        Operation::ok("update_post"),
        input,
        json_body_with_id::<UpdatePostRequest>,
        |clients, ctx, req| async move { clients.posts.update_post(&ctx, req).await },
    )
    .await
}

pub async fn delete_post(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<DeletePostResponse> {
    dispatch(
        &state,
        Operation::ok("delete_post"),
        input,
        by_id::<DeletePostRequest>,
        |clients, ctx, req| async move { clients.posts.delete_post(&ctx, req).await },
    )
    .await
}

/// Filters: `user_id`, `title`, `category_id`, `body`.
pub async fn get_all_posts(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<GetAllPostsResponse> {
    dispatch(
        &state,
        Operation::ok("get_all_posts"),
        input,
        listing::<GetAllPostsRequest>,
        |clients, ctx, req| async move { clients.posts.get_all_posts(&ctx, req).await },
    )
    .await
}
