use axum::extract::State;
use forumgate_rpc::pb::category::{
    Category, CreateCategoryRequest, DeleteCategoryRequest, DeleteCategoryResponse,
    GetAllCategoriesRequest, GetAllCategoriesResponse, GetCategoryRequest, UpdateCategoryRequest,
};

use crate::dispatch::binder::{by_id, json_body, json_body_with_id, listing};
use crate::dispatch::{Dispatched, Operation, RequestInput, dispatch};
use crate::state::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<Category> {
    dispatch(
        &state,
        Operation::created("create_category"),
        input,
        json_body::<CreateCategoryRequest>,
        |clients, ctx, req| async move { clients.categories.create_category(&ctx, req).await },
    )
    .await
}

pub async fn get_category(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<Category> {
    dispatch(
        &state,
        Operation::ok("get_category"),
        input,
        by_id::<GetCategoryRequest>,
        |clients, ctx, req| async move { clients.categories.get_category(&ctx, req).await },
    )
    .await
}

pub async fn update_category(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<Category> {
    dispatch(
        &state,
        Operation::ok("update_category"),
        input,
        json_body_with_id::<UpdateCategoryRequest>,
        |clients, ctx, req| async move { clients.categories.update_category(&ctx, req).await },
    )
    .await
}

/// `PUT /categories` with the identifier carried in the body.
pub async fn update_category_from_body(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<Category> {
    dispatch(
        &state,
        Operation::ok("update_category"),
        input,
        json_body::<UpdateCategoryRequest>,
        |clients, ctx, req| async move { clients.categories.update_category(&ctx, req).await },
    )
    .await
}

pub async fn delete_category(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<DeleteCategoryResponse> {
    dispatch(
        &state,
        Operation::ok("delete_category"),
        input,
        by_id::<DeleteCategoryRequest>,
        |clients, ctx, req| async move { clients.categories.delete_category(&ctx, req).await },
    )
    .await
}

pub async fn get_all_categories(
    State(state): State<AppState>,
    input: RequestInput,
) -> Dispatched<GetAllCategoriesResponse> {
    dispatch(
        &state,
        Operation::ok("get_all_categories"),
        input,
        listing::<GetAllCategoriesRequest>,
        |clients, ctx, req| async move { clients.categories.get_all_categories(&ctx, req).await },
    )
    .await
}
