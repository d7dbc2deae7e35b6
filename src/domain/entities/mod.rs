//! Clinic record types.
//!
//! Every module defines the same four pieces for one record type:
//!
//! - the stored row (`Client`, `Pet`, ...)
//! - the validated values used for inserts and updates (`NewClient`, ...)
//! - the submitted form of raw strings (`ClientForm`, ...) with its validator
//! - the [`Record`](crate::domain::record::Record) implementation tying them together
//!
//! Records are independent: there are no relationships between tables.

pub mod client;
pub mod medicine;
pub mod pet;
pub mod product;
pub mod provider;
pub mod vet;

pub use client::{Client, ClientForm, NewClient, validate_client};
pub use medicine::{Medicine, MedicineForm, NewMedicine, validate_medicine};
pub use pet::{NewPet, Pet, PetForm, validate_pet};
pub use product::{NewProduct, Product, ProductForm, validate_product};
pub use provider::{NewProvider, Provider, ProviderForm, validate_provider};
pub use vet::{NewVet, Speciality, Vet, VetForm, validate_vet};
