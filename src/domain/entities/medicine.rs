//! Medicine kept in the clinic's stock.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::record::{Record, overwrite};
use crate::domain::validation::{FieldErrors, FieldRules, field_errors, is_blank, rejection};

pub const NAME_REQUIRED: &str = "Por favor, ingrese un nombre de la medicina";
pub const DESCRIPTION_REQUIRED: &str = "Por favor, ingrese una descripcion de la medicina";
pub const DOSE_REQUIRED: &str = "Por favor, ingrese una cantidad de la dosis de la medicina";
pub const DOSE_NOT_INTEGER: &str = "La dosis debe ser un numero entero";
pub const DOSE_OUT_OF_RANGE: &str = "La dosis debe estar entre 1 y 10";

/// Accepted dose range, inclusive.
pub const DOSE_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub dose: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicine {
    pub name: String,
    pub description: String,
    pub dose: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MedicineForm {
    pub name: String,
    pub description: String,
    pub dose: String,
}

/// Parses a dose written as plain decimal digits within [`DOSE_RANGE`].
///
/// Signs, decimal points, exponents and surrounding spaces are not integers
/// here: `"2.5"`, `"+3"` and `" 7 "` are all rejected as non-integers.
pub fn parse_dose(value: &str) -> Result<i32, ValidationError> {
    if is_blank(value) {
        return Err(rejection("required", DOSE_REQUIRED));
    }

    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(rejection("integer", DOSE_NOT_INTEGER));
    }

    // All digits but too long for i32 is still out of range.
    match value.parse::<i32>() {
        Ok(dose) if DOSE_RANGE.contains(&dose) => Ok(dose),
        _ => Err(rejection("range", DOSE_OUT_OF_RANGE)),
    }
}

impl Validate for MedicineForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut rules = FieldRules::new();
        rules.required("name", &self.name, NAME_REQUIRED);
        rules.required("description", &self.description, DESCRIPTION_REQUIRED);
        rules.check("dose", parse_dose(&self.dose));
        rules.finish()
    }
}

pub fn validate_medicine(form: &MedicineForm) -> FieldErrors {
    field_errors(form)
}

impl Record for Medicine {
    type Form = MedicineForm;
    type New = NewMedicine;

    const NAME: &'static str = "medicine";
    const SLUG: &'static str = "medicines";
    const FIELDS: &'static [&'static str] = &["name", "description", "dose"];

    fn id(&self) -> i64 {
        self.id
    }

    fn parse(form: &MedicineForm) -> Result<NewMedicine, FieldErrors> {
        form.validate()?;
        let dose = parse_dose(&form.dose).map_err(|e| FieldErrors::single("dose", &e))?;

        Ok(NewMedicine {
            name: form.name.clone(),
            description: form.description.clone(),
            dose,
        })
    }

    fn from_new(id: i64, new: NewMedicine) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            dose: new.dose,
        }
    }

    fn values(&self) -> NewMedicine {
        NewMedicine {
            name: self.name.clone(),
            description: self.description.clone(),
            dose: self.dose,
        }
    }

    fn merge(&mut self, incoming: NewMedicine) {
        overwrite(&mut self.name, incoming.name);
        overwrite(&mut self.description, incoming.description);
        self.dose = incoming.dose;
    }

    fn to_form(&self) -> MedicineForm {
        MedicineForm {
            name: self.name.clone(),
            description: self.description.clone(),
            dose: self.dose.to_string(),
        }
    }
}
