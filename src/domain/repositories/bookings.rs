use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::bookings::{BookingEntity, InsertBookingEntity};
use crate::domain::entities::customers::UpsertCustomerEntity;
use crate::domain::value_objects::bookings::ListBookingsFilter;
use crate::domain::value_objects::enums::booking_statuses::BookingStatus;

#[async_trait]
#[automock]
pub trait BookingRepository {
    /// Upserts the customer by email and inserts the booking in one
    /// transaction, linking the booking to the customer row.
    async fn create_with_customer(
        &self,
        booking_entity: InsertBookingEntity,
        customer_entity: UpsertCustomerEntity,
    ) -> Result<Uuid>;
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<BookingEntity>>;
    async fn list(&self, filter: &ListBookingsFilter) -> Result<Vec<BookingEntity>>;
    /// Compare-and-set: applies the transition only while the row still
    /// holds `from`. Returns whether a row changed.
    async fn update_status_from(
        &self,
        booking_id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool>;
    async fn delete(&self, booking_id: Uuid) -> Result<()>;
    /// Crash-recovery sweep: confirms any booking still pending whose
    /// payment already committed `completed`. Returns repaired count.
    async fn confirm_bookings_with_completed_payments(&self) -> Result<usize>;
}
