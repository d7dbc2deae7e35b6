//! Domain layer containing clinic records and their validation rules.
//!
//! # Architecture
//!
//! - [`validation`] - Field error mapping and shared field rules
//! - [`record`] - The [`record::Record`] contract: form, typed values, stored row
//! - [`entities`] - Clients, providers, products, medicines, pets and vets
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the web or infrastructure layers
//! - Validators are pure: submitted strings in, field error mapping out
//! - Business flow (validate, then write) lives in [`crate::application::services`]

pub mod entities;
pub mod record;
pub mod repositories;
pub mod validation;
