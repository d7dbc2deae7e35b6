//! Error pages.

use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::web::navbar::navbar;
use crate::web::pages::ErrorTemplate;

/// [`AppError`] rendered as an HTML page with the matching status code.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let page = ErrorTemplate {
            title: status.canonical_reason().unwrap_or("Error"),
            nav: navbar(""),
            status: status.as_u16(),
            message: self.0.to_string(),
        };

        (status, page).into_response()
    }
}
