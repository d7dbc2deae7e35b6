//! Repository trait for clinic records.

use crate::domain::record::Record;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for one record type.
///
/// Implementations never validate: they receive values already accepted by
/// [`Record::parse`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// Inserts a record and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new: R::New) -> Result<R, AppError>;

    /// Finds a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<R>, AppError>;

    /// Lists every record ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<R>, AppError>;

    /// Writes all stored fields of `record`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, record: R) -> Result<R, AppError>;

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
