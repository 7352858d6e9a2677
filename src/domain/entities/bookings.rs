use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::bookings;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = bookings)]
pub struct BookingEntity {
    pub id: Uuid,
    pub customer_id: Option<Uuid>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_id: i64,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub status: String,
    pub amount_minor: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct InsertBookingEntity {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_id: i64,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub status: String,
    pub amount_minor: i32,
    pub notes: Option<String>,
}
