//! How each record type is shown in lists and forms.

use crate::domain::entities::{
    Client, ClientForm, Medicine, MedicineForm, Pet, PetForm, Product, ProductForm, Provider,
    ProviderForm, Speciality, Vet, VetForm, pet,
};
use crate::domain::record::Record;
use crate::domain::validation::FieldErrors;

/// Presentation of a record type in the HTML pages.
pub trait RecordView: Record {
    /// Collection title, also the navigation label ("Clientes").
    const TITLE: &'static str;
    /// Singular noun used in buttons and form captions ("cliente").
    const SINGULAR: &'static str;
    /// Message shown when the collection is empty.
    const EMPTY: &'static str;
    /// Column headers, matching [`RecordView::cells`].
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    /// Form inputs prefilled with `form` values, in field order.
    fn form_fields(form: &Self::Form) -> Vec<FormField>;
}

/// One `<option>` of a select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

/// One labelled input of a record form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub options: Vec<SelectOption>,
    pub error: Option<String>,
}

impl FormField {
    pub fn text(name: &'static str, label: &'static str, value: &str) -> Self {
        Self {
            name,
            label,
            input_type: "text",
            value: value.to_string(),
            options: Vec::new(),
            error: None,
        }
    }

    pub fn input(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn select(name: &'static str, label: &'static str, value: &str, options: &[&'static str]) -> Self {
        let options = options
            .iter()
            .map(|&option| SelectOption {
                value: option,
                selected: option == value,
            })
            .collect();

        Self {
            options,
            ..Self::text(name, label, value).input("select")
        }
    }

    pub fn is_select(&self) -> bool {
        self.input_type == "select"
    }
}

/// Form inputs for `form` with the messages of `errors` attached.
pub fn form_fields<R: RecordView>(form: &R::Form, errors: &FieldErrors) -> Vec<FormField> {
    R::form_fields(form)
        .into_iter()
        .map(|mut field| {
            field.error = errors.get(field.name).map(str::to_string);
            field
        })
        .collect()
}

impl RecordView for Client {
    const TITLE: &'static str = "Clientes";
    const SINGULAR: &'static str = "cliente";
    const EMPTY: &'static str = "No existen clientes";
    const HEADERS: &'static [&'static str] = &["Nombre", "Teléfono", "Email", "Dirección"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone().unwrap_or_default(),
        ]
    }

    fn form_fields(form: &ClientForm) -> Vec<FormField> {
        vec![
            FormField::text("name", "Nombre", &form.name),
            FormField::text("phone", "Teléfono", &form.phone).input("tel"),
            FormField::text("email", "Email", &form.email).input("email"),
            FormField::text("address", "Dirección", &form.address),
        ]
    }
}

impl RecordView for Provider {
    const TITLE: &'static str = "Proveedores";
    const SINGULAR: &'static str = "proveedor";
    const EMPTY: &'static str = "No existen proveedores";
    const HEADERS: &'static [&'static str] = &["Nombre", "Email", "Dirección"];

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.email.clone(), self.address.clone()]
    }

    fn form_fields(form: &ProviderForm) -> Vec<FormField> {
        vec![
            FormField::text("name", "Nombre", &form.name),
            FormField::text("email", "Email", &form.email).input("email"),
            FormField::text("address", "Dirección", &form.address),
        ]
    }
}

impl RecordView for Product {
    const TITLE: &'static str = "Productos";
    const SINGULAR: &'static str = "producto";
    const EMPTY: &'static str = "No existen productos";
    const HEADERS: &'static [&'static str] = &["Nombre", "Tipo", "Precio"];

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.kind.clone(), self.price.to_string()]
    }

    fn form_fields(form: &ProductForm) -> Vec<FormField> {
        vec![
            FormField::text("name", "Nombre", &form.name),
            FormField::text("type", "Tipo", &form.kind),
            FormField::text("price", "Precio", &form.price),
        ]
    }
}

impl RecordView for Medicine {
    const TITLE: &'static str = "Medicinas";
    const SINGULAR: &'static str = "medicina";
    const EMPTY: &'static str = "No existen medicinas";
    const HEADERS: &'static [&'static str] = &["Nombre", "Descripción", "Dosis"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.dose.to_string(),
        ]
    }

    fn form_fields(form: &MedicineForm) -> Vec<FormField> {
        vec![
            FormField::text("name", "Nombre", &form.name),
            FormField::text("description", "Descripción", &form.description),
            FormField::text("dose", "Dosis", &form.dose),
        ]
    }
}

impl RecordView for Pet {
    const TITLE: &'static str = "Mascotas";
    const SINGULAR: &'static str = "mascota";
    const EMPTY: &'static str = "No existen mascotas";
    const HEADERS: &'static [&'static str] = &["Nombre", "Raza", "Fecha de Nacimiento"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.breed.clone(),
            self.birthday.format(pet::DATE_FORMAT).to_string(),
        ]
    }

    fn form_fields(form: &PetForm) -> Vec<FormField> {
        vec![
            FormField::text("name", "Nombre", &form.name),
            FormField::text("breed", "Raza", &form.breed),
            FormField::text("birthday", "Fecha de Nacimiento", &form.birthday).input("date"),
        ]
    }
}

impl RecordView for Vet {
    const TITLE: &'static str = "Veterinarios";
    const SINGULAR: &'static str = "veterinario";
    const EMPTY: &'static str = "No existen veterinarios";
    const HEADERS: &'static [&'static str] = &["Nombre", "Email", "Teléfono", "Especialidad"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.speciality.to_string(),
        ]
    }

    fn form_fields(form: &VetForm) -> Vec<FormField> {
        let specialities = Speciality::ALL.map(Speciality::as_str);

        vec![
            FormField::text("name", "Nombre", &form.name),
            FormField::text("email", "Email", &form.email).input("email"),
            FormField::text("phone", "Teléfono", &form.phone).input("tel"),
            FormField::select("speciality", "Especialidad", &form.speciality, &specialities),
        ]
    }
}
