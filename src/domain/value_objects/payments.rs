use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::payments::PaymentEntity,
    value_objects::enums::payment_statuses::PaymentStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderModel {
    pub booking_id: Uuid,
    /// Accepted for API compatibility but never trusted; the charged
    /// amount always comes from the booking row.
    pub amount_minor: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDto {
    pub id: String,
    pub amount_minor: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponseDto {
    pub key: String,
    pub order: OrderDto,
    pub payment_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPaymentModel {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    pub payment_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentDto {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount_minor: i32,
    pub currency: String,
    pub status: PaymentStatus,
    pub method: Option<String>,
    pub provider_order_id: String,
    pub provider_payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentEntity> for PaymentDto {
    fn from(value: PaymentEntity) -> Self {
        Self {
            id: value.id,
            booking_id: value.booking_id,
            amount_minor: value.amount_minor,
            currency: value.currency,
            status: PaymentStatus::from_str(&value.status).unwrap_or(PaymentStatus::Pending),
            method: value.method,
            provider_order_id: value.provider_order_id,
            provider_payment_id: value.provider_payment_id,
            created_at: value.created_at,
        }
    }
}
