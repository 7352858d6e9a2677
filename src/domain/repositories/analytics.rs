use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::analytics::{
    CategoryRevenueDto, MonthlyCountDto, StatusCountDto,
};

#[async_trait]
#[automock]
pub trait AnalyticsRepository {
    async fn booking_status_counts(&self) -> Result<Vec<StatusCountDto>>;
    async fn completed_revenue_minor(&self) -> Result<i64>;
    async fn unread_contact_count(&self) -> Result<i64>;
    async fn bookings_per_month(&self, months: i32) -> Result<Vec<MonthlyCountDto>>;
    async fn revenue_by_category(&self) -> Result<Vec<CategoryRevenueDto>>;
}
