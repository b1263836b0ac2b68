use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    error::{AppError, AppResult},
    models::{CreatedResponse, HealthResponse, Item, ItemRecord, MessageResponse},
    state::AppState,
};

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the item service"))
}

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<ItemRecord>>> {
    let items = state.repo.list().await?;
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let Json(item) = payload?;
    let id = state.repo.create(item).await?;

    Ok(Json(CreatedResponse {
        message: "Item created successfully".to_string(),
        id,
    }))
}

pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<ItemRecord>> {
    let Path(id) = id?;
    let item = state
        .repo
        .get(id)
        .await?
        .ok_or_else(AppError::item_not_found)?;

    Ok(Json(item))
}

pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Item>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let Json(item) = payload?;

    if !state.repo.update(id, item).await? {
        return Err(AppError::item_not_found());
    }

    Ok(Json(MessageResponse::new("Item updated successfully")))
}

pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id?;

    if !state.repo.delete(id).await? {
        return Err(AppError::item_not_found());
    }

    Ok(Json(MessageResponse::new("Item deleted successfully")))
}
