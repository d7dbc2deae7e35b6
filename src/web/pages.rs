//! Page templates.

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::validation::FieldErrors;
use crate::web::navbar::{NavLink, navbar};
use crate::web::views::{FormField, RecordView, form_fields};

/// Collection card on the home page.
#[derive(Debug, Clone)]
pub struct HomeCard {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub count: i64,
}

/// Renders `templates/home.html`: one card per collection with its record count.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub cards: Vec<HomeCard>,
}

/// Table row of a list page.
#[derive(Debug, Clone)]
pub struct ListRow {
    pub id: i64,
    pub cells: Vec<String>,
}

/// Renders `templates/records/list.html`.
#[derive(Template, WebTemplate)]
#[template(path = "records/list.html")]
pub struct ListTemplate {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub slug: &'static str,
    pub singular: &'static str,
    pub empty: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<ListRow>,
}

impl ListTemplate {
    pub fn new<R: RecordView>(path: &str, records: &[R]) -> Self {
        Self {
            title: R::TITLE,
            nav: navbar(path),
            slug: R::SLUG,
            singular: R::SINGULAR,
            empty: R::EMPTY,
            headers: R::HEADERS,
            rows: records
                .iter()
                .map(|record| ListRow {
                    id: record.id(),
                    cells: record.cells(),
                })
                .collect(),
        }
    }
}

/// Renders `templates/records/form.html` for creating or editing a record.
///
/// When `id` is set the form carries it as a hidden field and the submission
/// updates that record.
#[derive(Template, WebTemplate)]
#[template(path = "records/form.html")]
pub struct FormTemplate {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub slug: &'static str,
    pub singular: &'static str,
    pub id: Option<i64>,
    pub fields: Vec<FormField>,
}

impl FormTemplate {
    pub fn new<R: RecordView>(
        path: &str,
        id: Option<i64>,
        form: &R::Form,
        errors: &FieldErrors,
    ) -> Self {
        Self {
            title: R::TITLE,
            nav: navbar(path),
            slug: R::SLUG,
            singular: R::SINGULAR,
            id,
            fields: form_fields::<R>(form, errors),
        }
    }

    pub fn edit<R: RecordView>(path: &str, record: &R) -> Self {
        Self::new::<R>(path, Some(record.id()), &record.to_form(), &FieldErrors::new())
    }
}

/// Renders `templates/error.html`.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub status: u16,
    pub message: String,
}
