use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::payments::{InsertPaymentEntity, PaymentEntity};

#[async_trait]
#[automock]
pub trait PaymentRepository {
    /// Inserts a pending payment for its booking inside a transaction.
    /// Returns `None` without inserting when a non-terminal payment
    /// already exists for the booking.
    async fn create_pending_for_booking(
        &self,
        payment_entity: InsertPaymentEntity,
    ) -> Result<Option<Uuid>>;
    async fn find_by_id(&self, payment_id: Uuid) -> Result<Option<PaymentEntity>>;
    /// The verification commit: compare-and-set the payment
    /// pending -> completed (storing the gateway payment id) and, in the
    /// same transaction, the owning booking pending -> confirmed.
    /// Returns false when the payment had already been finalized.
    async fn complete_and_confirm_booking(
        &self,
        payment_id: Uuid,
        provider_payment_id: &str,
    ) -> Result<bool>;
}
