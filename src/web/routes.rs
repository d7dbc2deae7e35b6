//! HTML route configuration.

use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::services::RecordService;
use crate::domain::entities::{Client, Medicine, Pet, Product, Provider, Vet};
use crate::state::AppState;
use crate::web::handlers::{
    delete_handler, edit_page_handler, home_handler, list_page_handler, new_page_handler,
    submit_handler,
};
use crate::web::views::RecordView;

/// Pages for one record collection.
///
/// # Endpoints
///
/// - `GET  /{slug}`            - Record table
/// - `GET  /{slug}/new`        - Empty form
/// - `POST /{slug}/new`        - Create, or update when `id` is submitted
/// - `GET  /{slug}/edit/{id}`  - Prefilled form
/// - `POST /{slug}/delete`     - Delete the record named by `id`
pub fn record_pages<R: RecordView>() -> Router<AppState>
where
    Arc<RecordService<R>>: FromRef<AppState>,
{
    let slug = R::SLUG;

    Router::new()
        .route(&format!("/{slug}"), get(list_page_handler::<R>))
        .route(
            &format!("/{slug}/new"),
            get(new_page_handler::<R>).post(submit_handler::<R>),
        )
        .route(&format!("/{slug}/edit/{{id}}"), get(edit_page_handler::<R>))
        .route(&format!("/{slug}/delete"), post(delete_handler::<R>))
}

/// Home page and every collection's pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .merge(record_pages::<Client>())
        .merge(record_pages::<Provider>())
        .merge(record_pages::<Product>())
        .merge(record_pages::<Medicine>())
        .merge(record_pages::<Pet>())
        .merge(record_pages::<Vet>())
}
