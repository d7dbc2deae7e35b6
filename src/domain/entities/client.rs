//! Clinic client (pet owner).

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::record::{Record, overwrite};
use crate::domain::validation::{FieldErrors, FieldRules, field_errors, non_blank};

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const PHONE_REQUIRED: &str = "Por favor ingrese un teléfono";
pub const EMAIL_REQUIRED: &str = "Por favor ingrese un email";
pub const EMAIL_INVALID: &str = "Por favor ingrese un email valido";

/// A stored client.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
}

/// Validated values for inserting or updating a client.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
}

/// Submitted client fields.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Validate for ClientForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut rules = FieldRules::new();
        rules.required("name", &self.name, NAME_REQUIRED);
        rules.required("phone", &self.phone, PHONE_REQUIRED);
        rules.email("email", &self.email, EMAIL_REQUIRED, EMAIL_INVALID);
        rules.finish()
    }
}

/// Validates a client submission. An empty mapping means it is acceptable.
pub fn validate_client(form: &ClientForm) -> FieldErrors {
    field_errors(form)
}

impl Record for Client {
    type Form = ClientForm;
    type New = NewClient;

    const NAME: &'static str = "client";
    const SLUG: &'static str = "clients";
    const FIELDS: &'static [&'static str] = &["name", "phone", "email", "address"];

    fn id(&self) -> i64 {
        self.id
    }

    fn parse(form: &ClientForm) -> Result<NewClient, FieldErrors> {
        form.validate()?;

        Ok(NewClient {
            name: form.name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            address: non_blank(&form.address),
        })
    }

    fn from_new(id: i64, new: NewClient) -> Self {
        Self {
            id,
            name: new.name,
            phone: new.phone,
            email: new.email,
            address: new.address,
        }
    }

    fn values(&self) -> NewClient {
        NewClient {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }

    fn merge(&mut self, incoming: NewClient) {
        overwrite(&mut self.name, incoming.name);
        overwrite(&mut self.phone, incoming.phone);
        overwrite(&mut self.email, incoming.email);
        if incoming.address.is_some() {
            self.address = incoming.address;
        }
    }

    fn to_form(&self) -> ClientForm {
        ClientForm {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone().unwrap_or_default(),
        }
    }
}
