//! Data Transfer Objects for API responses.
//!
//! Request bodies are the record forms themselves (see
//! [`crate::domain::record::Record::Form`]); only the envelopes live here.

pub mod health;
pub mod records;
