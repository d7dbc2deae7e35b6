//! HTTP middleware for request processing.
//!
//! Provides request tracing shared by the API and the HTML pages.

pub mod tracing;
