//! List, form and delete pages shared by every record type.

use axum::{
    Form,
    extract::{Path, State},
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use std::sync::Arc;

use crate::application::services::RecordService;
use crate::domain::validation::FieldErrors;
use crate::error::AppError;
use crate::web::error::PageError;
use crate::web::pages::{FormTemplate, ListTemplate};
use crate::web::views::RecordView;

/// Submitted record form. A non-empty `id` turns the submission into an update.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct Submission<F> {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub form: F,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub id: i64,
}

fn list_path<R: RecordView>() -> String {
    format!("/{}", R::SLUG)
}

/// `GET /{slug}`
pub async fn list_page_handler<R: RecordView>(
    uri: Uri,
    State(service): State<Arc<RecordService<R>>>,
) -> Result<ListTemplate, PageError> {
    let records = service.list().await?;

    Ok(ListTemplate::new(uri.path(), &records))
}

/// `GET /{slug}/new`
pub async fn new_page_handler<R: RecordView>(uri: Uri) -> FormTemplate {
    FormTemplate::new::<R>(uri.path(), None, &R::Form::default(), &FieldErrors::new())
}

/// Creates or updates a record.
///
/// # Endpoint
///
/// `POST /{slug}/new`
///
/// Redirects to the list on success. A rejected submission re-renders the
/// form with the submitted values and one message per offending field.
///
/// # Errors
///
/// Returns a 404 page when updating a record that does not exist.
pub async fn submit_handler<R: RecordView>(
    uri: Uri,
    State(service): State<Arc<RecordService<R>>>,
    Form(submission): Form<Submission<R::Form>>,
) -> Result<Response, PageError> {
    let Submission { id, form } = submission;

    let result = match id {
        Some(id) => service.update(id, &form).await,
        None => service.save(&form).await,
    };

    match result {
        Ok(_) => Ok(Redirect::to(&list_path::<R>()).into_response()),
        Err(AppError::Validation { fields, .. }) => {
            Ok(FormTemplate::new::<R>(uri.path(), id, &form, &fields).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// `GET /{slug}/edit/{id}`
///
/// # Errors
///
/// Returns a 404 page if the record does not exist.
pub async fn edit_page_handler<R: RecordView>(
    uri: Uri,
    Path(id): Path<i64>,
    State(service): State<Arc<RecordService<R>>>,
) -> Result<FormTemplate, PageError> {
    let record = service.get(id).await?;

    Ok(FormTemplate::edit(uri.path(), &record))
}

/// `POST /{slug}/delete`
///
/// # Errors
///
/// Returns a 404 page if the record does not exist.
pub async fn delete_handler<R: RecordView>(
    State(service): State<Arc<RecordService<R>>>,
    Form(DeleteForm { id }): Form<DeleteForm>,
) -> Result<Redirect, PageError> {
    service.delete(id).await?;

    Ok(Redirect::to(&list_path::<R>()))
}
