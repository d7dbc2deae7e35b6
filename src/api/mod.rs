//! JSON API layer.
//!
//! Exposes every record collection as a REST resource and reports service
//! health. Bodies are JSON objects of string fields, validated by the same
//! rules as the HTML forms.
//!
//! # Modules
//!
//! - [`dto`] - Response envelopes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
