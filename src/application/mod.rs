//! Application layer services implementing business logic.
//!
//! This layer runs the record validators before any write and coordinates
//! repository calls. Services consume repository traits and provide a clean
//! API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::record_service::RecordService`] - Save, update, list and delete for one record type

pub mod services;
