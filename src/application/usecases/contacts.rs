use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    repositories::contacts::ContactRepository,
    value_objects::contacts::{ContactDto, InsertContactModel},
};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(String),
    #[error("contact message not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ContactError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::NotFound => StatusCode::NOT_FOUND,
            ContactError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, ContactError>;

pub struct ContactUseCase<C>
where
    C: ContactRepository + Send + Sync + 'static,
{
    contact_repo: Arc<C>,
}

impl<C> ContactUseCase<C>
where
    C: ContactRepository + Send + Sync + 'static,
{
    pub fn new(contact_repo: Arc<C>) -> Self {
        Self { contact_repo }
    }

    pub async fn create(&self, model: InsertContactModel) -> UseCaseResult<i64> {
        if let Err(message) = model.validate() {
            warn!(%message, "contacts: request failed validation");
            return Err(ContactError::Validation(message));
        }

        let contact_id = self
            .contact_repo
            .create(model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "contacts: failed to insert contact message");
                ContactError::Internal(err)
            })?;

        info!(contact_id, "contacts: message stored");
        Ok(contact_id)
    }

    pub async fn list(&self, page: i64, limit: i64) -> UseCaseResult<Vec<ContactDto>> {
        let limit = limit.clamp(1, 100);
        let offset = (page.max(1) - 1) * limit;

        let contacts = self.contact_repo.list(offset, limit).await.map_err(|err| {
            error!(db_error = ?err, "contacts: failed to list messages");
            ContactError::Internal(err)
        })?;

        Ok(contacts.into_iter().map(ContactDto::from).collect())
    }

    pub async fn mark_read(&self, contact_id: i64) -> UseCaseResult<()> {
        let updated = self
            .contact_repo
            .mark_read(contact_id)
            .await
            .map_err(|err| {
                error!(contact_id, db_error = ?err, "contacts: failed to mark message read");
                ContactError::Internal(err)
            })?;

        if !updated {
            return Err(ContactError::NotFound);
        }

        Ok(())
    }

    pub async fn delete(&self, contact_id: i64) -> UseCaseResult<()> {
        self.contact_repo.delete(contact_id).await.map_err(|err| {
            error!(contact_id, db_error = ?err, "contacts: failed to delete message");
            ContactError::Internal(err)
        })?;

        info!(contact_id, "contacts: message deleted");
        Ok(())
    }
}
