use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{Connection, RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::payments::{InsertPaymentEntity, PaymentEntity},
        repositories::payments::PaymentRepository,
        value_objects::enums::{
            booking_statuses::BookingStatus, payment_statuses::PaymentStatus,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{bookings, payments},
    },
};

pub struct PaymentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PaymentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PaymentRepository for PaymentPostgres {
    async fn create_pending_for_booking(
        &self,
        payment_entity: InsertPaymentEntity,
    ) -> Result<Option<Uuid>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let payment_id = conn.transaction::<_, anyhow::Error, _>(|conn| {
            let open_payment = payments::table
                .filter(payments::booking_id.eq(payment_entity.booking_id))
                .filter(payments::status.eq(PaymentStatus::Pending.to_string()))
                .select(payments::id)
                .first::<Uuid>(conn)
                .optional()?;

            if open_payment.is_some() {
                return Ok(None);
            }

            let payment_id = insert_into(payments::table)
                .values(&payment_entity)
                .returning(payments::id)
                .get_result::<Uuid>(conn)?;

            Ok(Some(payment_id))
        })?;

        Ok(payment_id)
    }

    async fn find_by_id(&self, payment_id: Uuid) -> Result<Option<PaymentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = payments::table
            .filter(payments::id.eq(payment_id))
            .select(PaymentEntity::as_select())
            .first::<PaymentEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn complete_and_confirm_booking(
        &self,
        payment_id: Uuid,
        provider_payment_id: &str,
    ) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let applied = conn.transaction::<_, anyhow::Error, _>(|conn| {
            // Compare-and-set: only the first verification moves the
            // payment out of pending. Replays and concurrent callbacks
            // match zero rows here.
            let completed = update(payments::table)
                .filter(payments::id.eq(payment_id))
                .filter(payments::status.eq(PaymentStatus::Pending.to_string()))
                .set((
                    payments::status.eq(PaymentStatus::Completed.to_string()),
                    payments::provider_payment_id.eq(Some(provider_payment_id.to_string())),
                    payments::updated_at.eq(Utc::now()),
                ))
                .returning(payments::booking_id)
                .get_result::<Uuid>(conn)
                .optional()?;

            let Some(booking_id) = completed else {
                return Ok(false);
            };

            // Same transaction as the payment write: a booking can only
            // become confirmed together with its completed payment.
            update(bookings::table)
                .filter(bookings::id.eq(booking_id))
                .filter(bookings::status.eq(BookingStatus::Pending.to_string()))
                .set((
                    bookings::status.eq(BookingStatus::Confirmed.to_string()),
                    bookings::updated_at.eq(Utc::now()),
                ))
                .execute(conn)?;

            Ok(true)
        })?;

        Ok(applied)
    }
}
