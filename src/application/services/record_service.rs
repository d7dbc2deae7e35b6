//! Save/update/delete flow shared by every record type.

use crate::domain::record::Record;
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for one record type.
///
/// Every write runs the record's validator first. A rejected submission
/// returns [`AppError::Validation`] and never reaches the repository, so
/// stored data is either fully replaced or left untouched.
pub struct RecordService<R: Record> {
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> RecordService<R> {
    /// Creates a new record service.
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    /// Validates a submission and inserts it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the rejected fields; nothing is written.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn save(&self, form: &R::Form) -> Result<R, AppError> {
        let new = R::parse(form).inspect_err(|fields| {
            tracing::debug!(record = R::NAME, ?fields, "Rejected new record");
        })?;

        let record = self.repository.create(new).await?;
        tracing::info!(record = R::NAME, id = record.id(), "Record created");

        Ok(record)
    }

    /// Validates a submission and applies it to an existing record.
    ///
    /// Empty incoming values keep the stored ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the rejected fields; the stored record is unchanged.
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, form: &R::Form) -> Result<R, AppError> {
        let incoming = R::parse(form).inspect_err(|fields| {
            tracing::debug!(record = R::NAME, id, ?fields, "Rejected update");
        })?;

        let mut record = self.get(id).await?;
        record.merge(incoming);

        let record = self.repository.update(record).await?;
        tracing::info!(record = R::NAME, id, "Record updated");

        Ok(record)
    }

    /// Retrieves a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<R, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::record_not_found::<R>(id))
    }

    /// Lists all records ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        self.repository.list().await
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(record = R::NAME, id, "Record deleted");
        Ok(())
    }

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        Client, ClientForm, Medicine, MedicineForm, NewClient, Pet, PetForm, Product, ProductForm,
    };
    use crate::domain::repositories::MockRecordRepository;

    fn veron_form() -> ClientForm {
        ClientForm {
            name: "Juan Sebastian Veron".to_string(),
            phone: "221555232".to_string(),
            email: "brujita75@hotmail.com".to_string(),
            address: "13 y 44".to_string(),
        }
    }

    fn stored_veron() -> Client {
        Client {
            id: 1,
            name: "Juan Sebastian Veron".to_string(),
            phone: "221555232".to_string(),
            email: "brujita75@hotmail.com".to_string(),
            address: Some("13 y 44".to_string()),
        }
    }

    #[tokio::test]
    async fn test_save_client_success() {
        let mut mock_repo = MockRecordRepository::<Client>::new();

        mock_repo
            .expect_create()
            .withf(|new: &NewClient| new.name == "Juan Sebastian Veron" && new.phone == "221555232")
            .times(1)
            .returning(|new| Ok(Client::from_new(1, new)));

        let service = RecordService::<Client>::new(Arc::new(mock_repo));

        let client = service.save(&veron_form()).await.unwrap();

        assert_eq!(client.id, 1);
        assert_eq!(client.email, "brujita75@hotmail.com");
        assert_eq!(client.address.as_deref(), Some("13 y 44"));
    }

    #[tokio::test]
    async fn test_save_invalid_client_writes_nothing() {
        let mut mock_repo = MockRecordRepository::<Client>::new();
        mock_repo.expect_create().times(0);

        let service = RecordService::<Client>::new(Arc::new(mock_repo));

        let result = service.save(&ClientForm::default()).await;

        let error = result.unwrap_err();
        let fields = error.fields().unwrap();
        assert!(fields.contains("name"));
        assert!(fields.contains("phone"));
        assert!(fields.contains("email"));
    }

    #[tokio::test]
    async fn test_save_rejects_each_missing_required_field() {
        for field in ["name", "phone", "email"] {
            let mut mock_repo = MockRecordRepository::<Client>::new();
            mock_repo.expect_create().times(0);
            let service = RecordService::<Client>::new(Arc::new(mock_repo));

            let mut form = veron_form();
            match field {
                "name" => form.name.clear(),
                "phone" => form.phone.clear(),
                _ => form.email.clear(),
            }

            let error = service.save(&form).await.unwrap_err();
            assert!(error.fields().unwrap().contains(field), "{field}");
        }
    }

    #[tokio::test]
    async fn test_save_medicine_with_out_of_range_dose() {
        let mut mock_repo = MockRecordRepository::<Medicine>::new();
        mock_repo.expect_create().times(0);
        let service = RecordService::<Medicine>::new(Arc::new(mock_repo));

        let form = MedicineForm {
            name: "Amoxicilina".to_string(),
            description: "Antibiotico".to_string(),
            dose: "11".to_string(),
        };

        let error = service.save(&form).await.unwrap_err();
        assert!(matches!(error, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_save_pet_with_future_birthday() {
        let mut mock_repo = MockRecordRepository::<Pet>::new();
        mock_repo.expect_create().times(0);
        let service = RecordService::<Pet>::new(Arc::new(mock_repo));

        let form = PetForm {
            name: "gatito".to_string(),
            breed: "orange".to_string(),
            birthday: "2999-01-01".to_string(),
        };

        let error = service.save(&form).await.unwrap_err();
        assert!(error.fields().unwrap().contains("birthday"));
    }

    #[tokio::test]
    async fn test_update_client_success() {
        let mut mock_repo = MockRecordRepository::<Client>::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(stored_veron())));

        mock_repo
            .expect_update()
            .withf(|client: &Client| client.phone == "221555233" && client.name == "Juan Sebastian Veron")
            .times(1)
            .returning(Ok);

        let service = RecordService::<Client>::new(Arc::new(mock_repo));

        let form = ClientForm {
            phone: "221555233".to_string(),
            ..veron_form()
        };
        let client = service.update(1, &form).await.unwrap();

        assert_eq!(client.phone, "221555233");
    }

    #[tokio::test]
    async fn test_update_keeps_stored_address_when_blank() {
        let mut mock_repo = MockRecordRepository::<Client>::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_veron())));
        mock_repo.expect_update().times(1).returning(Ok);

        let service = RecordService::<Client>::new(Arc::new(mock_repo));

        let form = ClientForm {
            name: "Guido Carrillo".to_string(),
            address: String::new(),
            ..veron_form()
        };
        let client = service.update(1, &form).await.unwrap();

        assert_eq!(client.name, "Guido Carrillo");
        assert_eq!(client.address.as_deref(), Some("13 y 44"));
    }

    #[tokio::test]
    async fn test_update_with_error_leaves_record_untouched() {
        let mut mock_repo = MockRecordRepository::<Client>::new();
        mock_repo.expect_find_by_id().times(0);
        mock_repo.expect_update().times(0);

        let service = RecordService::<Client>::new(Arc::new(mock_repo));

        let form = ClientForm {
            phone: String::new(),
            ..Default::default()
        };
        let error = service.update(1, &form).await.unwrap_err();

        assert!(error.fields().unwrap().contains("phone"));
    }

    #[tokio::test]
    async fn test_update_product_with_invalid_price() {
        let mut mock_repo = MockRecordRepository::<Product>::new();
        mock_repo.expect_update().times(0);
        let service = RecordService::<Product>::new(Arc::new(mock_repo));

        let form = ProductForm {
            name: "ampicilina".to_string(),
            kind: "antibiotico".to_string(),
            price: "-10".to_string(),
        };

        let error = service.update(1, &form).await.unwrap_err();
        assert_eq!(
            error.fields().unwrap().get("price"),
            Some("Por favor ingrese un precio mayor a cero")
        );
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let mut mock_repo = MockRecordRepository::<Client>::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update().times(0);

        let service = RecordService::<Client>::new(Arc::new(mock_repo));

        let error = service.update(100, &veron_form()).await.unwrap_err();
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut mock_repo = MockRecordRepository::<Client>::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = RecordService::<Client>::new(Arc::new(mock_repo));

        let result = service.get(100).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let mut mock_repo = MockRecordRepository::<Client>::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![stored_veron()]));
        mock_repo.expect_count().times(1).returning(|| Ok(1));

        let service = RecordService::<Client>::new(Arc::new(mock_repo));

        assert_eq!(service.list().await.unwrap().len(), 1);
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_propagates_not_found() {
        let mut mock_repo = MockRecordRepository::<Client>::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 5)
            .times(1)
            .returning(|id| Err(AppError::record_not_found::<Client>(id)));

        let service = RecordService::<Client>::new(Arc::new(mock_repo));

        let result = service.delete(5).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
