//! The contract every clinic record type fulfils.

use crate::domain::validation::FieldErrors;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use validator::Validate;

/// A persisted record type together with its submission form.
///
/// A record moves through three shapes:
///
/// - [`Record::Form`] - the raw submitted strings (HTML form or JSON body)
/// - [`Record::New`] - typed values, produced only by [`Record::parse`]
/// - `Self` - the stored row with its generated id
pub trait Record: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Submitted fields, all strings. Missing fields deserialize as empty.
    type Form: Validate + Clone + Debug + Default + DeserializeOwned + Send + Sync + 'static;

    /// Validated field values ready to be written.
    type New: Clone + Debug + Send + Sync + 'static;

    /// Singular name used in logs ("client").
    const NAME: &'static str;

    /// Collection path segment ("clients").
    const SLUG: &'static str;

    /// Submitted field names in display order.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> i64;

    /// Validates the form and converts it into typed values.
    ///
    /// # Errors
    ///
    /// Returns every rejected field with its message.
    fn parse(form: &Self::Form) -> Result<Self::New, FieldErrors>;

    /// Builds the stored record for a freshly assigned id.
    fn from_new(id: i64, new: Self::New) -> Self;

    /// Current stored values.
    fn values(&self) -> Self::New;

    /// Overwrites stored values with incoming ones. Absent incoming values
    /// keep what is stored.
    fn merge(&mut self, incoming: Self::New);

    /// Form prefilled with the stored values.
    fn to_form(&self) -> Self::Form;
}

/// Replaces `target` unless `incoming` is empty.
pub(crate) fn overwrite(target: &mut String, incoming: String) {
    if !incoming.is_empty() {
        *target = incoming;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_existing_on_empty() {
        let mut value = "221555232".to_string();
        overwrite(&mut value, String::new());
        assert_eq!(value, "221555232");

        overwrite(&mut value, "221555233".to_string());
        assert_eq!(value, "221555233");
    }
}
