//! Repository trait definitions for the domain layer.
//!
//! A single generic trait covers every record type; the concrete PostgreSQL
//! implementation lives in `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! `MockRecordRepository` is auto-generated via `mockall` for unit tests.
//! See integration tests in `tests/repository_records.rs` for database usage.

pub mod record_repository;

pub use record_repository::RecordRepository;

#[cfg(test)]
pub use record_repository::MockRecordRepository;
