//! Handlers for record collection endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::api::dto::records::RecordListResponse;
use crate::application::services::RecordService;
use crate::domain::record::Record;
use crate::error::AppError;

/// Lists all records of one type.
///
/// # Endpoint
///
/// `GET /api/{slug}`
pub async fn list_records_handler<R: Record>(
    State(service): State<Arc<RecordService<R>>>,
) -> Result<Json<RecordListResponse<R>>, AppError> {
    let items = service.list().await?;

    Ok(Json(RecordListResponse { items }))
}

/// Creates a record from a JSON object of string fields.
///
/// # Endpoint
///
/// `POST /api/{slug}`
///
/// # Errors
///
/// Returns 400 with the field error mapping in `details` if validation fails.
pub async fn create_record_handler<R: Record>(
    State(service): State<Arc<RecordService<R>>>,
    Json(form): Json<R::Form>,
) -> Result<(StatusCode, Json<R>), AppError> {
    let record = service.save(&form).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Returns a single record.
///
/// # Endpoint
///
/// `GET /api/{slug}/{id}`
///
/// # Errors
///
/// Returns 404 if the record does not exist.
pub async fn get_record_handler<R: Record>(
    Path(id): Path<i64>,
    State(service): State<Arc<RecordService<R>>>,
) -> Result<Json<R>, AppError> {
    Ok(Json(service.get(id).await?))
}

/// Updates a record.
///
/// # Endpoint
///
/// `PUT /api/{slug}/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails; the stored record is left unchanged.
/// Returns 404 if the record does not exist.
pub async fn update_record_handler<R: Record>(
    Path(id): Path<i64>,
    State(service): State<Arc<RecordService<R>>>,
    Json(form): Json<R::Form>,
) -> Result<Json<R>, AppError> {
    Ok(Json(service.update(id, &form).await?))
}

/// Deletes a record.
///
/// # Endpoint
///
/// `DELETE /api/{slug}/{id}`
///
/// # Errors
///
/// Returns 404 if the record does not exist.
pub async fn delete_record_handler<R: Record>(
    Path(id): Path<i64>,
    State(service): State<Arc<RecordService<R>>>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
