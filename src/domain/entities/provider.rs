//! Supplier of products and medicines.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::record::{Record, overwrite};
use crate::domain::validation::{FieldErrors, FieldRules, field_errors};

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const EMAIL_REQUIRED: &str = "Por favor ingrese un email";
pub const EMAIL_INVALID: &str = "Por favor ingrese un email valido";
pub const ADDRESS_REQUIRED: &str = "Por favor ingrese una dirección";

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProvider {
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderForm {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl Validate for ProviderForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut rules = FieldRules::new();
        rules.required("name", &self.name, NAME_REQUIRED);
        rules.email("email", &self.email, EMAIL_REQUIRED, EMAIL_INVALID);
        rules.required("address", &self.address, ADDRESS_REQUIRED);
        rules.finish()
    }
}

pub fn validate_provider(form: &ProviderForm) -> FieldErrors {
    field_errors(form)
}

impl Record for Provider {
    type Form = ProviderForm;
    type New = NewProvider;

    const NAME: &'static str = "provider";
    const SLUG: &'static str = "providers";
    const FIELDS: &'static [&'static str] = &["name", "email", "address"];

    fn id(&self) -> i64 {
        self.id
    }

    fn parse(form: &ProviderForm) -> Result<NewProvider, FieldErrors> {
        form.validate()?;

        Ok(NewProvider {
            name: form.name.clone(),
            email: form.email.clone(),
            address: form.address.clone(),
        })
    }

    fn from_new(id: i64, new: NewProvider) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            address: new.address,
        }
    }

    fn values(&self) -> NewProvider {
        NewProvider {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }

    fn merge(&mut self, incoming: NewProvider) {
        overwrite(&mut self.name, incoming.name);
        overwrite(&mut self.email, incoming.email);
        overwrite(&mut self.address, incoming.address);
    }

    fn to_form(&self) -> ProviderForm {
        ProviderForm {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}
