use axum::extract::State;
use forumgate_rpc::pb::comment::{
    Comment, CreateCommentRequest, DeleteCommentRequest, DeleteCommentResponse,
    GetAllCommentsRequest, GetAllCommentsResponse, GetCommentRequest, UpdateCommentRequest,
};

use crate::dispatch::binder::{by_id, json_body, json_body_with_id, listing};
use crate::dispatch::{Dispatched, Operation, RequestInput, dispatch};
use crate::state::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<Comment> {
    dispatch(
        &state,
        Operation::created("create_comment"),
        input,
        json_body::<CreateCommentRequest>,
        |clients, ctx, req| async move { clients.comments.create_comment(&ctx, req).await },
    )
    .await
}

pub async fn get_comment(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<Comment> {
    dispatch(
        &state,
        Operation::ok("get_comment"),
        input,
        by_id::<GetCommentRequest>,
        |clients, ctx, req| async move { clients.comments.get_comment(&ctx, req).await },
    )
    .await
}

pub async fn update_comment(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<Comment> {
    dispatch(
        &state,
        Operation::ok("update_comment"),
        input,
        json_body_with_id::<UpdateCommentRequest>,
        |clients, ctx, req| async move { clients.comments.update_comment(&ctx, req).await },
    )
    .await
}

pub async fn delete_comment(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<DeleteCommentResponse> {
    dispatch(
        &state,
        Operation::ok("delete_comment"),
        input,
        by_id::<DeleteCommentRequest>,
        |clients, ctx, req| async move { clients.comments.delete_comment(&ctx, req).await },
    )
    .await
}

pub async fn get_all_comments(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<GetAllCommentsResponse> {
    dispatch(
        &state,
        Operation::ok("get_all_comments"),
        input,
        listing::<GetAllCommentsRequest>,
        |clients, ctx, req| async move { clients.comments.get_all_comments(&ctx, req).await },
    )
    .await
}
