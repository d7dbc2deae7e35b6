#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use vet_clinic::prelude::*;

/// In-memory record table with sequential ids starting at 1.
pub struct MemoryRepository<R> {
    records: Mutex<Vec<R>>,
    next_id: AtomicI64,
}

impl<R> MemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl<R: Record> RecordRepository<R> for MemoryRepository<R> {
    async fn create(&self, new: R::New) -> Result<R, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = R::from_new(id, new);
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<R>, AppError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn update(&self, record: R) -> Result<R, AppError> {
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| AppError::record_not_found::<R>(record.id()))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(AppError::record_not_found::<R>(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.lock().unwrap().len() as i64)
    }
}

/// Repository whose every call fails like an unreachable database.
pub struct FailingRepository;

#[async_trait]
impl<R: Record> RecordRepository<R> for FailingRepository {
    async fn create(&self, _new: R::New) -> Result<R, AppError> {
        Err(down())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<R>, AppError> {
        Err(down())
    }

    async fn list(&self) -> Result<Vec<R>, AppError> {
        Err(down())
    }

    async fn update(&self, _record: R) -> Result<R, AppError> {
        Err(down())
    }

    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        Err(down())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(down())
    }
}

fn down() -> AppError {
    AppError::internal("Database error", json!({}))
}

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryRepository::<Client>::new()),
        Arc::new(MemoryRepository::<Provider>::new()),
        Arc::new(MemoryRepository::<Product>::new()),
        Arc::new(MemoryRepository::<Medicine>::new()),
        Arc::new(MemoryRepository::<Pet>::new()),
        Arc::new(MemoryRepository::<Vet>::new()),
    )
}

pub fn create_failing_state() -> AppState {
    AppState::new(
        Arc::new(FailingRepository),
        Arc::new(FailingRepository),
        Arc::new(FailingRepository),
        Arc::new(FailingRepository),
        Arc::new(FailingRepository),
        Arc::new(FailingRepository),
    )
}

pub fn veron() -> ClientForm {
    ClientForm {
        name: "Juan Sebastián Veron".to_string(),
        phone: "221555232".to_string(),
        email: "brujita75@hotmail.com".to_string(),
        address: "13 y 44".to_string(),
    }
}

pub async fn create_client(state: &AppState) -> Client {
    state.clients.save(&veron()).await.unwrap()
}
