use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{Connection, RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            bookings::{BookingEntity, InsertBookingEntity},
            customers::UpsertCustomerEntity,
        },
        repositories::bookings::BookingRepository,
        value_objects::{
            bookings::ListBookingsFilter,
            enums::{
                booking_statuses::BookingStatus, payment_statuses::PaymentStatus,
                sort_order::SortOrder,
            },
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{bookings, customers, payments},
    },
};

pub struct BookingPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl BookingPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BookingRepository for BookingPostgres {
    async fn create_with_customer(
        &self,
        booking_entity: InsertBookingEntity,
        customer_entity: UpsertCustomerEntity,
    ) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let booking_id = conn.transaction::<_, anyhow::Error, _>(|conn| {
            let customer_id = insert_into(customers::table)
                .values(&customer_entity)
                .on_conflict(customers::email)
                .do_update()
                .set((
                    customers::name.eq(&customer_entity.name),
                    customers::phone.eq(&customer_entity.phone),
                ))
                .returning(customers::id)
                .get_result::<Uuid>(conn)?;

            let booking_id = insert_into(bookings::table)
                .values((&booking_entity, bookings::customer_id.eq(Some(customer_id))))
                .returning(bookings::id)
                .get_result::<Uuid>(conn)?;

            Ok(booking_id)
        })?;

        Ok(booking_id)
    }

    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<BookingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = bookings::table
            .filter(bookings::id.eq(booking_id))
            .select(BookingEntity::as_select())
            .first::<BookingEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self, filter: &ListBookingsFilter) -> Result<Vec<BookingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = bookings::table
            .select(BookingEntity::as_select())
            .into_boxed();

        if let Some(status) = &filter.status {
            query = query.filter(bookings::status.eq(status.to_string()));
        }

        query = match (filter.sort_by.as_deref(), filter.sort_order) {
            (Some("event_date"), SortOrder::Asc) => query.order(bookings::event_date.asc()),
            (Some("event_date"), SortOrder::Desc) => query.order(bookings::event_date.desc()),
            (_, SortOrder::Asc) => query.order(bookings::created_at.asc()),
            (_, SortOrder::Desc) => query.order(bookings::created_at.desc()),
        };

        let results = query
            .offset(filter.offset())
            .limit(filter.limit_or_default())
            .load::<BookingEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update_status_from(
        &self,
        booking_id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(bookings::table)
            .filter(bookings::id.eq(booking_id))
            .filter(bookings::status.eq(from.to_string()))
            .set((
                bookings::status.eq(to.to_string()),
                bookings::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(affected == 1)
    }

    async fn delete(&self, booking_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        delete(bookings::table.filter(bookings::id.eq(booking_id))).execute(&mut conn)?;

        Ok(())
    }

    async fn confirm_bookings_with_completed_payments(&self) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let completed_booking_ids = payments::table
            .filter(payments::status.eq(PaymentStatus::Completed.to_string()))
            .select(payments::booking_id);

        let repaired = update(bookings::table)
            .filter(bookings::status.eq(BookingStatus::Pending.to_string()))
            .filter(bookings::id.eq_any(completed_booking_ids))
            .set((
                bookings::status.eq(BookingStatus::Confirmed.to_string()),
                bookings::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(repaired)
    }
}
