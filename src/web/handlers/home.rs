//! Home page handler.

use axum::extract::State;

use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::navbar::{LINKS, navbar};
use crate::web::pages::{HomeCard, HomeTemplate};

/// Renders the home page with one card per collection.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<HomeTemplate, PageError> {
    let counts = state.record_counts().await?;

    let cards = LINKS
        .iter()
        .skip(1)
        .zip(counts)
        .map(|(&(label, href, icon), (_, count))| HomeCard {
            label,
            href,
            icon,
            count,
        })
        .collect();

    Ok(HomeTemplate {
        title: "Home",
        nav: navbar("/"),
        cards,
    })
}
