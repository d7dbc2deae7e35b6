//! HTTP request handlers for API endpoints.
//!
//! Record handlers are generic over the record type and mounted once per
//! collection by [`crate::api::routes`].

pub mod health;
pub mod records;

pub use health::health_handler;
pub use records::{
    create_record_handler, delete_record_handler, get_record_handler, list_records_handler,
    update_record_handler,
};
