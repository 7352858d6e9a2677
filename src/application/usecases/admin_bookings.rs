use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    repositories::bookings::BookingRepository,
    value_objects::{
        bookings::{BookingDto, ListBookingsFilter},
        enums::booking_statuses::BookingStatus,
    },
};

#[derive(Debug, Error)]
pub enum AdminBookingError {
    #[error("booking not found")]
    NotFound,
    #[error("illegal status transition from {from} to {to}")]
    IllegalTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AdminBookingError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AdminBookingError::NotFound => StatusCode::NOT_FOUND,
            AdminBookingError::IllegalTransition { .. } => StatusCode::CONFLICT,
            AdminBookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AdminBookingError>;

pub struct AdminBookingUseCase<B>
where
    B: BookingRepository + Send + Sync + 'static,
{
    booking_repo: Arc<B>,
}

impl<B> AdminBookingUseCase<B>
where
    B: BookingRepository + Send + Sync + 'static,
{
    pub fn new(booking_repo: Arc<B>) -> Self {
        Self { booking_repo }
    }

    pub async fn list(&self, filter: &ListBookingsFilter) -> UseCaseResult<Vec<BookingDto>> {
        let bookings = self.booking_repo.list(filter).await.map_err(|err| {
            error!(db_error = ?err, "admin bookings: failed to list bookings");
            AdminBookingError::Internal(err)
        })?;

        Ok(bookings.into_iter().map(BookingDto::from).collect())
    }

    /// Admin status override. The transition table still applies: the
    /// update is compare-and-set against the status the decision was
    /// made on, so a concurrent verification cannot be overwritten.
    pub async fn update_status(
        &self,
        booking_id: Uuid,
        to: BookingStatus,
    ) -> UseCaseResult<()> {
        let booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await
            .map_err(|err| {
                error!(%booking_id, db_error = ?err, "admin bookings: failed to load booking");
                AdminBookingError::Internal(err)
            })?
            .ok_or(AdminBookingError::NotFound)?;

        let from = BookingStatus::from_str(&booking.status).unwrap_or(BookingStatus::Pending);
        if !from.can_transition_to(to) {
            warn!(
                %booking_id,
                from = %from,
                to = %to,
                "admin bookings: illegal status transition rejected"
            );
            return Err(AdminBookingError::IllegalTransition { from, to });
        }

        let applied = self
            .booking_repo
            .update_status_from(booking_id, from, to)
            .await
            .map_err(|err| {
                error!(%booking_id, db_error = ?err, "admin bookings: failed to update status");
                AdminBookingError::Internal(err)
            })?;

        if !applied {
            // The row moved underneath us; surface it as a conflict.
            warn!(
                %booking_id,
                from = %from,
                to = %to,
                "admin bookings: booking changed concurrently, transition not applied"
            );
            return Err(AdminBookingError::IllegalTransition { from, to });
        }

        info!(%booking_id, from = %from, to = %to, "admin bookings: status updated");
        Ok(())
    }

    pub async fn delete(&self, booking_id: Uuid) -> UseCaseResult<()> {
        self.booking_repo.delete(booking_id).await.map_err(|err| {
            error!(%booking_id, db_error = ?err, "admin bookings: failed to delete booking");
            AdminBookingError::Internal(err)
        })?;

        info!(%booking_id, "admin bookings: booking deleted");
        Ok(())
    }
}
