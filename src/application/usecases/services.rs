use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    repositories::services::ServiceRepository,
    value_objects::services::{EditServiceModel, InsertServiceModel, ServiceDto},
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("service not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, ServiceError>;

pub struct ServiceUseCase<S>
where
    S: ServiceRepository + Send + Sync + 'static,
{
    service_repo: Arc<S>,
}

impl<S> ServiceUseCase<S>
where
    S: ServiceRepository + Send + Sync + 'static,
{
    pub fn new(service_repo: Arc<S>) -> Self {
        Self { service_repo }
    }

    pub async fn list_active(&self) -> UseCaseResult<Vec<ServiceDto>> {
        let services = self.service_repo.list_active().await.map_err(|err| {
            error!(db_error = ?err, "services: failed to list active services");
            ServiceError::Internal(err)
        })?;

        Ok(services.into_iter().map(ServiceDto::from).collect())
    }

    pub async fn create(&self, model: InsertServiceModel) -> UseCaseResult<i64> {
        if let Err(message) = model.validate() {
            warn!(%message, "services: request failed validation");
            return Err(ServiceError::Validation(message));
        }

        let service_id = self
            .service_repo
            .create(model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "services: failed to insert service");
                ServiceError::Internal(err)
            })?;

        info!(service_id, "services: service created");
        Ok(service_id)
    }

    pub async fn update(&self, service_id: i64, model: EditServiceModel) -> UseCaseResult<()> {
        let updated = self
            .service_repo
            .update(service_id, model.to_entity())
            .await
            .map_err(|err| {
                error!(service_id, db_error = ?err, "services: failed to update service");
                ServiceError::Internal(err)
            })?;

        if !updated {
            return Err(ServiceError::NotFound);
        }

        info!(service_id, "services: service updated");
        Ok(())
    }

    pub async fn deactivate(&self, service_id: i64) -> UseCaseResult<()> {
        let updated = self
            .service_repo
            .deactivate(service_id)
            .await
            .map_err(|err| {
                error!(service_id, db_error = ?err, "services: failed to deactivate service");
                ServiceError::Internal(err)
            })?;

        if !updated {
            return Err(ServiceError::NotFound);
        }

        info!(service_id, "services: service deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::services::MockServiceRepository;

    #[tokio::test]
    async fn rejects_a_zero_duration_service() {
        let model = InsertServiceModel {
            name: "Party Makeup".to_string(),
            category: "party".to_string(),
            description: None,
            price_minor: 500000,
            duration_min: 0,
            artist_id: 7,
        };

        let usecase = ServiceUseCase::new(Arc::new(MockServiceRepository::new()));
        let result = usecase.create(model).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn new_services_start_active() {
        let mut service_repo = MockServiceRepository::new();
        service_repo
            .expect_create()
            .withf(|entity| entity.is_active)
            .times(1)
            .returning(|_| Box::pin(async { Ok(5) }));

        let usecase = ServiceUseCase::new(Arc::new(service_repo));
        let model = InsertServiceModel {
            name: "Party Makeup".to_string(),
            category: "party".to_string(),
            description: None,
            price_minor: 500000,
            duration_min: 90,
            artist_id: 7,
        };

        assert_eq!(usecase.create(model).await.unwrap(), 5);
    }
}
