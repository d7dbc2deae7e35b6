//! API route configuration.
//!
//! Every record type gets the same five endpoints under its collection slug.

use axum::{
    Router,
    extract::FromRef,
    routing::get,
};
use std::sync::Arc;

use crate::api::handlers::{
    create_record_handler, delete_record_handler, get_record_handler, list_records_handler,
    update_record_handler,
};
use crate::application::services::RecordService;
use crate::domain::entities::{Client, Medicine, Pet, Product, Provider, Vet};
use crate::domain::record::Record;
use crate::state::AppState;

/// Endpoints for one record collection.
///
/// # Endpoints
///
/// - `GET    /{slug}`       - List records
/// - `POST   /{slug}`       - Create a record
/// - `GET    /{slug}/{id}`  - Fetch a record
/// - `PUT    /{slug}/{id}`  - Update a record
/// - `DELETE /{slug}/{id}`  - Delete a record
pub fn record_routes<R: Record>() -> Router<AppState>
where
    Arc<RecordService<R>>: FromRef<AppState>,
{
    Router::new()
        .route(
            &format!("/{}", R::SLUG),
            get(list_records_handler::<R>).post(create_record_handler::<R>),
        )
        .route(
            &format!("/{}/{{id}}", R::SLUG),
            get(get_record_handler::<R>)
                .put(update_record_handler::<R>)
                .delete(delete_record_handler::<R>),
        )
}

/// All API routes, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(record_routes::<Client>())
        .merge(record_routes::<Provider>())
        .merge(record_routes::<Product>())
        .merge(record_routes::<Medicine>())
        .merge(record_routes::<Pet>())
        .merge(record_routes::<Vet>())
}
