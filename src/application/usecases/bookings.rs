use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::customers::UpsertCustomerEntity,
    repositories::{bookings::BookingRepository, services::ServiceRepository},
    value_objects::bookings::{BookingDto, InsertBookingModel},
};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),
    #[error("service not found")]
    ServiceNotFound,
    #[error("booking not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl BookingError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::ServiceNotFound | BookingError::NotFound => StatusCode::NOT_FOUND,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, BookingError>;

pub struct BookingUseCase<B, S>
where
    B: BookingRepository + Send + Sync + 'static,
    S: ServiceRepository + Send + Sync + 'static,
{
    booking_repo: Arc<B>,
    service_repo: Arc<S>,
}

impl<B, S> BookingUseCase<B, S>
where
    B: BookingRepository + Send + Sync + 'static,
    S: ServiceRepository + Send + Sync + 'static,
{
    pub fn new(booking_repo: Arc<B>, service_repo: Arc<S>) -> Self {
        Self {
            booking_repo,
            service_repo,
        }
    }

    /// Reservation of intent: records the booking as pending. No payment
    /// is created here; the amount is the service's canonical price.
    pub async fn create(&self, model: InsertBookingModel) -> UseCaseResult<BookingDto> {
        if let Err(message) = model.validate() {
            warn!(%message, "bookings: request failed validation");
            return Err(BookingError::Validation(message));
        }

        let service = self
            .service_repo
            .find_active_by_id(model.service_id)
            .await
            .map_err(|err| {
                error!(
                    service_id = model.service_id,
                    db_error = ?err,
                    "bookings: failed to load service"
                );
                BookingError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(
                    service_id = model.service_id,
                    "bookings: unknown or inactive service"
                );
                BookingError::ServiceNotFound
            })?;

        let booking_entity = model.to_entity(service.price_minor);
        let customer_entity = UpsertCustomerEntity {
            name: booking_entity.customer_name.clone(),
            email: booking_entity.customer_email.clone(),
            phone: booking_entity.customer_phone.clone(),
        };

        let booking_id = self
            .booking_repo
            .create_with_customer(booking_entity, customer_entity)
            .await
            .map_err(|err| {
                error!(
                    service_id = model.service_id,
                    db_error = ?err,
                    "bookings: failed to insert booking"
                );
                BookingError::Internal(err)
            })?;

        info!(
            %booking_id,
            service_id = service.id,
            amount_minor = service.price_minor,
            "bookings: booking created"
        );

        self.get(booking_id).await
    }

    pub async fn get(&self, booking_id: Uuid) -> UseCaseResult<BookingDto> {
        let booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await
            .map_err(|err| {
                error!(%booking_id, db_error = ?err, "bookings: failed to load booking");
                BookingError::Internal(err)
            })?
            .ok_or(BookingError::NotFound)?;

        Ok(BookingDto::from(booking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;

    use crate::domain::{
        entities::{bookings::BookingEntity, services::ServiceEntity},
        repositories::{bookings::MockBookingRepository, services::MockServiceRepository},
        value_objects::enums::booking_statuses::BookingStatus,
    };

    fn sample_model() -> InsertBookingModel {
        InsertBookingModel {
            customer_name: "Asha Rao".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: "+91-9000000001".to_string(),
            service_id: 1,
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            event_time: "10:30".to_string(),
            notes: None,
            amount_minor: 100,
        }
    }

    fn sample_service() -> ServiceEntity {
        ServiceEntity {
            id: 1,
            name: "Party Makeup".to_string(),
            category: "party".to_string(),
            description: None,
            price_minor: 500000,
            duration_min: 90,
            artist_id: 7,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn stored_booking(id: Uuid) -> BookingEntity {
        BookingEntity {
            id,
            customer_id: None,
            customer_name: "Asha Rao".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: "+91-9000000001".to_string(),
            service_id: 1,
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            event_time: "10:30".to_string(),
            status: BookingStatus::Pending.to_string(),
            amount_minor: 500000,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn creates_a_pending_booking_priced_from_the_service() {
        let booking_id = Uuid::new_v4();

        let mut service_repo = MockServiceRepository::new();
        service_repo
            .expect_find_active_by_id()
            .with(eq(1i64))
            .returning(|_| Box::pin(async { Ok(Some(sample_service())) }));

        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_create_with_customer()
            .withf(|booking, customer| {
                booking.status == "pending"
                    && booking.amount_minor == 500000
                    && customer.email == "asha@example.com"
            })
            .times(1)
            .returning(move |_, _| Box::pin(async move { Ok(booking_id) }));
        booking_repo
            .expect_find_by_id()
            .with(eq(booking_id))
            .returning(move |_| Box::pin(async move { Ok(Some(stored_booking(booking_id))) }));

        let usecase = BookingUseCase::new(Arc::new(booking_repo), Arc::new(service_repo));

        let dto = usecase
            .create(sample_model())
            .await
            .expect("booking creation should succeed");

        assert_eq!(dto.id, booking_id);
        assert_eq!(dto.status, BookingStatus::Pending);
        // The client sent 100; the service price wins.
        assert_eq!(dto.amount_minor, 500000);
    }

    #[tokio::test]
    async fn rejects_missing_fields_before_touching_the_database() {
        let mut model = sample_model();
        model.customer_email = String::new();

        // No repository expectations: a database call fails the test.
        let usecase = BookingUseCase::new(
            Arc::new(MockBookingRepository::new()),
            Arc::new(MockServiceRepository::new()),
        );

        let result = usecase.create(model).await;
        assert!(matches!(result, Err(BookingError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_an_unknown_service() {
        let mut service_repo = MockServiceRepository::new();
        service_repo
            .expect_find_active_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = BookingUseCase::new(
            Arc::new(MockBookingRepository::new()),
            Arc::new(service_repo),
        );

        let result = usecase.create(sample_model()).await;
        assert!(matches!(result, Err(BookingError::ServiceNotFound)));
    }

    #[tokio::test]
    async fn get_maps_missing_booking_to_not_found() {
        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = BookingUseCase::new(
            Arc::new(booking_repo),
            Arc::new(MockServiceRepository::new()),
        );

        let result = usecase.get(Uuid::new_v4()).await;
        assert!(matches!(result, Err(BookingError::NotFound)));
    }
}
