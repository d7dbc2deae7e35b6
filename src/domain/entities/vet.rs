//! Veterinarian on staff.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::record::{Record, overwrite};
use crate::domain::validation::{FieldErrors, FieldRules, field_errors, is_blank, rejection};

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const EMAIL_REQUIRED: &str = "Por favor ingrese un email";
pub const EMAIL_INVALID: &str = "Por favor ingrese un email valido";
pub const PHONE_REQUIRED: &str = "Por favor ingrese un teléfono";
pub const SPECIALITY_REQUIRED: &str = "Por favor seleccione una especialidad";
pub const SPECIALITY_INVALID: &str = "Por favor seleccione una especialidad valida";

/// Medical speciality of a veterinarian. Stored and submitted by its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speciality {
    #[serde(rename = "Oftalmologia")]
    Ophthalmology,
    #[serde(rename = "Quimioterapia")]
    Chemotherapy,
    #[serde(rename = "Radiologia")]
    Radiology,
    #[serde(rename = "Ecocardiografias")]
    Echocardiography,
    #[serde(rename = "Traumatologia")]
    Traumatology,
    #[serde(rename = "Ecografias")]
    Ultrasound,
    #[serde(rename = "Urgencias")]
    Emergency,
}

impl Speciality {
    pub const ALL: [Speciality; 7] = [
        Speciality::Ophthalmology,
        Speciality::Chemotherapy,
        Speciality::Radiology,
        Speciality::Echocardiography,
        Speciality::Traumatology,
        Speciality::Ultrasound,
        Speciality::Emergency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Speciality::Ophthalmology => "Oftalmologia",
            Speciality::Chemotherapy => "Quimioterapia",
            Speciality::Radiology => "Radiologia",
            Speciality::Echocardiography => "Ecocardiografias",
            Speciality::Traumatology => "Traumatologia",
            Speciality::Ultrasound => "Ecografias",
            Speciality::Emergency => "Urgencias",
        }
    }
}

impl fmt::Display for Speciality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown speciality: {0}")]
pub struct UnknownSpeciality(pub String);

impl FromStr for Speciality {
    type Err = UnknownSpeciality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Speciality::ALL
            .into_iter()
            .find(|speciality| speciality.as_str() == s)
            .ok_or_else(|| UnknownSpeciality(s.to_owned()))
    }
}

impl TryFrom<String> for Speciality {
    type Error = UnknownSpeciality;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Vet {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[sqlx(try_from = "String")]
    pub speciality: Speciality,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVet {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub speciality: Speciality,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VetForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub speciality: String,
}

/// Parses one of the seven speciality values.
pub fn parse_speciality(value: &str) -> Result<Speciality, ValidationError> {
    if is_blank(value) {
        return Err(rejection("required", SPECIALITY_REQUIRED));
    }

    value
        .parse()
        .map_err(|_| rejection("choice", SPECIALITY_INVALID))
}

impl Validate for VetForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut rules = FieldRules::new();
        rules.required("name", &self.name, NAME_REQUIRED);
        rules.email("email", &self.email, EMAIL_REQUIRED, EMAIL_INVALID);
        rules.required("phone", &self.phone, PHONE_REQUIRED);
        rules.check("speciality", parse_speciality(&self.speciality));
        rules.finish()
    }
}

pub fn validate_vet(form: &VetForm) -> FieldErrors {
    field_errors(form)
}

impl Record for Vet {
    type Form = VetForm;
    type New = NewVet;

    const NAME: &'static str = "vet";
    const SLUG: &'static str = "vets";
    const FIELDS: &'static [&'static str] = &["name", "email", "phone", "speciality"];

    fn id(&self) -> i64 {
        self.id
    }

    fn parse(form: &VetForm) -> Result<NewVet, FieldErrors> {
        form.validate()?;
        let speciality = parse_speciality(&form.speciality)
            .map_err(|e| FieldErrors::single("speciality", &e))?;

        Ok(NewVet {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            speciality,
        })
    }

    fn from_new(id: i64, new: NewVet) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            speciality: new.speciality,
        }
    }

    fn values(&self) -> NewVet {
        NewVet {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            speciality: self.speciality,
        }
    }

    fn merge(&mut self, incoming: NewVet) {
        overwrite(&mut self.name, incoming.name);
        overwrite(&mut self.email, incoming.email);
        overwrite(&mut self.phone, incoming.phone);
        self.speciality = incoming.speciality;
    }

    fn to_form(&self) -> VetForm {
        VetForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            speciality: self.speciality.as_str().to_owned(),
        }
    }
}
