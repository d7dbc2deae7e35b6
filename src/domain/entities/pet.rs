//! Patient animal.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::record::{Record, overwrite};
use crate::domain::validation::{FieldErrors, FieldRules, field_errors, rejection};

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const BREED_REQUIRED: &str = "Por favor ingrese una raza";
pub const BIRTHDAY_INVALID: &str =
    "Por favor ingrese una fecha de nacimiento valida y anterior a la de hoy";

/// Date format used by HTML date inputs and storage round-trips.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub birthday: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub breed: String,
    pub birthday: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PetForm {
    pub name: String,
    pub breed: String,
    pub birthday: String,
}

/// Parses a `YYYY-MM-DD` birthday strictly earlier than `today`.
pub fn parse_birthday(value: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(birthday) if birthday < today => Ok(birthday),
        _ => Err(rejection("birthday", BIRTHDAY_INVALID)),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl PetForm {
    /// Validates against an explicit current date.
    pub fn validate_on(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut rules = FieldRules::new();
        rules.required("name", &self.name, NAME_REQUIRED);
        rules.required("breed", &self.breed, BREED_REQUIRED);
        rules.check("birthday", parse_birthday(&self.birthday, today));
        rules.finish()
    }
}

impl Validate for PetForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_on(today())
    }
}

pub fn validate_pet(form: &PetForm) -> FieldErrors {
    field_errors(form)
}

impl Record for Pet {
    type Form = PetForm;
    type New = NewPet;

    const NAME: &'static str = "pet";
    const SLUG: &'static str = "pets";
    const FIELDS: &'static [&'static str] = &["name", "breed", "birthday"];

    fn id(&self) -> i64 {
        self.id
    }

    fn parse(form: &PetForm) -> Result<NewPet, FieldErrors> {
        let today = today();
        form.validate_on(today)?;
        let birthday = parse_birthday(&form.birthday, today)
            .map_err(|e| FieldErrors::single("birthday", &e))?;

        Ok(NewPet {
            name: form.name.clone(),
            breed: form.breed.clone(),
            birthday,
        })
    }

    fn from_new(id: i64, new: NewPet) -> Self {
        Self {
            id,
            name: new.name,
            breed: new.breed,
            birthday: new.birthday,
        }
    }

    fn values(&self) -> NewPet {
        NewPet {
            name: self.name.clone(),
            breed: self.breed.clone(),
            birthday: self.birthday,
        }
    }

    fn merge(&mut self, incoming: NewPet) {
        overwrite(&mut self.name, incoming.name);
        overwrite(&mut self.breed, incoming.breed);
        self.birthday = incoming.birthday;
    }

    fn to_form(&self) -> PetForm {
        PetForm {
            name: self.name.clone(),
            breed: self.breed.clone(),
            birthday: self.birthday.format(DATE_FORMAT).to_string(),
        }
    }
}
