use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
};
use serde::de::DeserializeOwned;

use crate::{
    error::AppError,
    models::{
        category::{CategoryCreateRequest, CategoryUpdateRequest},
        web::WebResponse,
    },
    state::AppState,
};

// POST /api/categories
pub async fn create_category_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body: CategoryCreateRequest = parse_body(&body)?;
    let category = state.categories.create(body).await?;
    Ok(WebResponse::ok(category))
}

// PUT /api/categories/:id
pub async fn update_category_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let body: CategoryUpdateRequest = parse_body(&body)?;
    let category = state.categories.update(id, body).await?;
    Ok(WebResponse::ok(category))
}

// DELETE /api/categories/:id
pub async fn delete_category_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    state.categories.delete(id).await?;
    Ok(WebResponse::ok(()))
}

// GET /api/categories/:id
pub async fn get_category_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let category = state.categories.find_by_id(id).await?;
    Ok(WebResponse::ok(category))
}

// GET /api/categories
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.categories.find_all().await?;
    Ok(WebResponse::ok(categories))
}

// Cualquier ruta desconocida
pub async fn fallback_handler() -> AppError {
    AppError::NotFound("Ruta no encontrada".to_string())
}

pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

// Un id que no es número no puede existir: lo tratamos como 404
fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!("Id inválido en la ruta: {}", rejection.body_text());
            Err(AppError::NotFound("Categoría no encontrada".to_string()))
        }
    }
}

// El body se decodifica como JSON sin mirar el Content-Type
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("JSON inválido: {}", e)))
}
