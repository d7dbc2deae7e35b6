//! Server-rendered HTML pages for managing clinic records.
//!
//! Uses Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`navbar`] - Navigation links and active-link detection
//! - [`views`] - Per-record table columns and form inputs
//! - [`pages`] - Template structs
//! - [`handlers`] - Page handlers
//! - [`routes`] - Page route configuration

pub mod error;
pub mod handlers;
pub mod navbar;
pub mod pages;
pub mod routes;
pub mod views;
