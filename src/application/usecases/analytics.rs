use std::sync::Arc;

use thiserror::Error;
use tracing::error;

use crate::domain::{
    repositories::analytics::AnalyticsRepository,
    value_objects::analytics::AnalyticsSummaryDto,
};

const MONTHS_IN_SUMMARY: i32 = 12;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AnalyticsError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AnalyticsError>;

pub struct AnalyticsUseCase<A>
where
    A: AnalyticsRepository + Send + Sync + 'static,
{
    analytics_repo: Arc<A>,
}

impl<A> AnalyticsUseCase<A>
where
    A: AnalyticsRepository + Send + Sync + 'static,
{
    pub fn new(analytics_repo: Arc<A>) -> Self {
        Self { analytics_repo }
    }

    pub async fn summary(&self) -> UseCaseResult<AnalyticsSummaryDto> {
        let bookings_by_status =
            self.analytics_repo
                .booking_status_counts()
                .await
                .map_err(|err| {
                    error!(db_error = ?err, "analytics: failed to count bookings by status");
                    AnalyticsError::Internal(err)
                })?;

        let completed_revenue_minor = self
            .analytics_repo
            .completed_revenue_minor()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "analytics: failed to sum completed revenue");
                AnalyticsError::Internal(err)
            })?;

        let unread_contacts = self
            .analytics_repo
            .unread_contact_count()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "analytics: failed to count unread contacts");
                AnalyticsError::Internal(err)
            })?;

        let bookings_per_month = self
            .analytics_repo
            .bookings_per_month(MONTHS_IN_SUMMARY)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "analytics: failed to bucket bookings per month");
                AnalyticsError::Internal(err)
            })?;

        let revenue_by_category = self
            .analytics_repo
            .revenue_by_category()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "analytics: failed to sum revenue by category");
                AnalyticsError::Internal(err)
            })?;

        Ok(AnalyticsSummaryDto {
            bookings_by_status,
            completed_revenue_minor,
            unread_contacts,
            bookings_per_month,
            revenue_by_category,
        })
    }
}
