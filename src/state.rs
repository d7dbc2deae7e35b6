//! Shared application state injected into every handler.

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::RecordService;
use crate::domain::entities::{Client, Medicine, Pet, Product, Provider, Vet};
use crate::domain::record::Record;
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::PgRecordRepository;

/// One record service per clinic entity.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<RecordService<Client>>,
    pub providers: Arc<RecordService<Provider>>,
    pub products: Arc<RecordService<Product>>,
    pub medicines: Arc<RecordService<Medicine>>,
    pub pets: Arc<RecordService<Pet>>,
    pub vets: Arc<RecordService<Vet>>,
}

impl AppState {
    /// Builds the state from one repository per entity.
    pub fn new(
        clients: Arc<dyn RecordRepository<Client>>,
        providers: Arc<dyn RecordRepository<Provider>>,
        products: Arc<dyn RecordRepository<Product>>,
        medicines: Arc<dyn RecordRepository<Medicine>>,
        pets: Arc<dyn RecordRepository<Pet>>,
        vets: Arc<dyn RecordRepository<Vet>>,
    ) -> Self {
        Self {
            clients: Arc::new(RecordService::new(clients)),
            providers: Arc::new(RecordService::new(providers)),
            products: Arc::new(RecordService::new(products)),
            medicines: Arc::new(RecordService::new(medicines)),
            pets: Arc::new(RecordService::new(pets)),
            vets: Arc::new(RecordService::new(vets)),
        }
    }

    /// Builds the state over PostgreSQL repositories sharing one pool.
    pub fn from_pool(pool: Arc<PgPool>) -> Self {
        Self::new(
            Arc::new(PgRecordRepository::<Client>::new(pool.clone())),
            Arc::new(PgRecordRepository::<Provider>::new(pool.clone())),
            Arc::new(PgRecordRepository::<Product>::new(pool.clone())),
            Arc::new(PgRecordRepository::<Medicine>::new(pool.clone())),
            Arc::new(PgRecordRepository::<Pet>::new(pool.clone())),
            Arc::new(PgRecordRepository::<Vet>::new(pool)),
        )
    }

    /// Stored records per collection slug, in navigation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on the first failing count.
    pub async fn record_counts(&self) -> Result<Vec<(&'static str, i64)>, AppError> {
        Ok(vec![
            (Client::SLUG, self.clients.count().await?),
            (Provider::SLUG, self.providers.count().await?),
            (Product::SLUG, self.products.count().await?),
            (Medicine::SLUG, self.medicines.count().await?),
            (Pet::SLUG, self.pets.count().await?),
            (Vet::SLUG, self.vets.count().await?),
        ])
    }
}

macro_rules! record_service_from_state {
    ($($record:ty => $field:ident),* $(,)?) => {
        $(
            impl FromRef<AppState> for Arc<RecordService<$record>> {
                fn from_ref(state: &AppState) -> Self {
                    state.$field.clone()
                }
            }
        )*
    };
}

record_service_from_state! {
    Client => clients,
    Provider => providers,
    Product => products,
    Medicine => medicines,
    Pet => pets,
    Vet => vets,
}
