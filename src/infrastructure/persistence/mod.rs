//! PostgreSQL repository implementations.
//!
//! A single generic repository serves every record type. Each type describes
//! its table through [`PgTable`]; statements are built once per repository and
//! run as runtime-checked SQLx queries mapped with `FromRow`.
//!
//! # Repositories
//!
//! - [`PgRecordRepository`] - Insert, lookup, listing, update and delete for one table

pub mod pg_record_repository;
pub mod tables;

pub use pg_record_repository::PgRecordRepository;
pub use tables::PgTable;
