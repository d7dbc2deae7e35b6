//! Product sold at the clinic.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::record::{Record, overwrite};
use crate::domain::validation::{FieldErrors, FieldRules, field_errors, is_blank, rejection};

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const TYPE_REQUIRED: &str = "Por favor ingrese un tipo";
pub const PRICE_REQUIRED: &str = "Por favor ingrese un precio";
pub const PRICE_INVALID: &str = "Por favor ingrese un precio válido";
pub const PRICE_NOT_POSITIVE: &str = "Por favor ingrese un precio mayor a cero";

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub kind: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: String,
}

/// Parses a price strictly greater than zero.
///
/// Surrounding whitespace is ignored by the number parser and `"inf"` is a
/// price like any other; `"nan"` compares with nothing and is not a price.
pub fn parse_price(value: &str) -> Result<f64, ValidationError> {
    if is_blank(value) {
        return Err(rejection("required", PRICE_REQUIRED));
    }

    match value.trim().parse::<f64>() {
        Ok(price) if price.is_nan() => Err(rejection("number", PRICE_INVALID)),
        Ok(price) if price <= 0.0 => Err(rejection("range", PRICE_NOT_POSITIVE)),
        Ok(price) => Ok(price),
        Err(_) => Err(rejection("number", PRICE_INVALID)),
    }
}

impl Validate for ProductForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut rules = FieldRules::new();
        rules.required("name", &self.name, NAME_REQUIRED);
        rules.required("type", &self.kind, TYPE_REQUIRED);
        rules.check("price", parse_price(&self.price));
        rules.finish()
    }
}

pub fn validate_product(form: &ProductForm) -> FieldErrors {
    field_errors(form)
}

impl Record for Product {
    type Form = ProductForm;
    type New = NewProduct;

    const NAME: &'static str = "product";
    const SLUG: &'static str = "products";
    const FIELDS: &'static [&'static str] = &["name", "type", "price"];

    fn id(&self) -> i64 {
        self.id
    }

    fn parse(form: &ProductForm) -> Result<NewProduct, FieldErrors> {
        form.validate()?;
        let price = parse_price(&form.price).map_err(|e| FieldErrors::single("price", &e))?;

        Ok(NewProduct {
            name: form.name.clone(),
            kind: form.kind.clone(),
            price,
        })
    }

    fn from_new(id: i64, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            kind: new.kind,
            price: new.price,
        }
    }

    fn values(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            kind: self.kind.clone(),
            price: self.price,
        }
    }

    fn merge(&mut self, incoming: NewProduct) {
        overwrite(&mut self.name, incoming.name);
        overwrite(&mut self.kind, incoming.kind);
        self.price = incoming.price;
    }

    fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.clone(),
            kind: self.kind.clone(),
            price: self.price.to_string(),
        }
    }
}
