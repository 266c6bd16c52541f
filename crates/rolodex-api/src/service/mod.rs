pub mod contact_service;

use super::Config;
use crate::persistence::DbContext;
use contact_service::{ContactService, ContactServiceApi};
use std::sync::Arc;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer
    #[error("Persistence error: {0}")]
    Persistence(#[from] rolodex_persistence::Error),

    /// errors that currently return early http status code Status::NotFound
    #[error("not found")]
    NotFound,

    /// errors that stem from validation
    #[error("Validation Error: {0}")]
    Validation(String),

    /// uniqueness violation on the contact email
    #[error("a contact with email {0} already exists")]
    DuplicateEmail(String),
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub config: Config,
    pub contact_service: Arc<dyn ContactServiceApi>,
}

pub async fn create_service_context(config: Config, db: DbContext) -> Result<ServiceContext> {
    let contact_service = Arc::new(ContactService::new(db.contact_store));

    Ok(ServiceContext {
        config,
        contact_service,
    })
}
