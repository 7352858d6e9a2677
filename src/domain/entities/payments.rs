use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::payments;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payments)]
pub struct PaymentEntity {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount_minor: i32,
    pub currency: String,
    pub status: String,
    pub method: Option<String>,
    pub provider_order_id: String,
    pub provider_payment_id: Option<String>,
    pub customer_email: String,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payments)]
pub struct InsertPaymentEntity {
    pub booking_id: Uuid,
    pub amount_minor: i32,
    pub currency: String,
    pub status: String,
    pub method: Option<String>,
    pub provider_order_id: String,
    pub provider_payment_id: Option<String>,
    pub customer_email: String,
    pub error: Option<String>,
}
