//! Table layout of every record type.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::domain::entities::{
    Client, Medicine, NewClient, NewMedicine, NewPet, NewProduct, NewProvider, NewVet, Pet,
    Product, Provider, Vet,
};
use crate::domain::record::Record;

/// Query over one record table with bound parameters.
pub type RecordQuery<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// Maps a record type onto its PostgreSQL table.
///
/// `COLUMNS` lists the writable columns, excluding `id`, in the order
/// [`PgTable::bind_new`] binds them.
pub trait PgTable: Record + for<'r> FromRow<'r, PgRow> + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn bind_new<'q>(new: Self::New, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self>;
}

impl PgTable for Client {
    const TABLE: &'static str = "clients";
    const COLUMNS: &'static [&'static str] = &["name", "phone", "email", "address"];

    fn bind_new<'q>(new: NewClient, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(new.name)
            .bind(new.phone)
            .bind(new.email)
            .bind(new.address)
    }
}

impl PgTable for Provider {
    const TABLE: &'static str = "providers";
    const COLUMNS: &'static [&'static str] = &["name", "email", "address"];

    fn bind_new<'q>(new: NewProvider, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query.bind(new.name).bind(new.email).bind(new.address)
    }
}

impl PgTable for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["name", "type", "price"];

    fn bind_new<'q>(new: NewProduct, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query.bind(new.name).bind(new.kind).bind(new.price)
    }
}

impl PgTable for Medicine {
    const TABLE: &'static str = "medicines";
    const COLUMNS: &'static [&'static str] = &["name", "description", "dose"];

    fn bind_new<'q>(new: NewMedicine, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query.bind(new.name).bind(new.description).bind(new.dose)
    }
}

impl PgTable for Pet {
    const TABLE: &'static str = "pets";
    const COLUMNS: &'static [&'static str] = &["name", "breed", "birthday"];

    fn bind_new<'q>(new: NewPet, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query.bind(new.name).bind(new.breed).bind(new.birthday)
    }
}

impl PgTable for Vet {
    const TABLE: &'static str = "vets";
    const COLUMNS: &'static [&'static str] = &["name", "email", "phone", "speciality"];

    fn bind_new<'q>(new: NewVet, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(new.name)
            .bind(new.email)
            .bind(new.phone)
            .bind(new.speciality.as_str())
    }
}
