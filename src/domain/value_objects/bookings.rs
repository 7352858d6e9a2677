use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::bookings::{BookingEntity, InsertBookingEntity},
    value_objects::enums::{booking_statuses::BookingStatus, sort_order::SortOrder},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertBookingModel {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_id: i64,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub notes: Option<String>,
    pub amount_minor: i64,
}

impl InsertBookingModel {
    /// Field-level validation; the stored amount is re-derived from the
    /// service row, so the client amount is only sanity-checked here.
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("customer_name is required".to_string());
        }
        if self.customer_email.trim().is_empty() || !self.customer_email.contains('@') {
            return Err("customer_email must be a valid email address".to_string());
        }
        if self.customer_phone.trim().is_empty() {
            return Err("customer_phone is required".to_string());
        }
        if self.event_time.trim().is_empty() {
            return Err("event_time is required".to_string());
        }
        if self.amount_minor < 0 {
            return Err("amount_minor must not be negative".to_string());
        }
        Ok(())
    }

    pub fn to_entity(&self, price_minor: i32) -> InsertBookingEntity {
        InsertBookingEntity {
            customer_name: self.customer_name.trim().to_string(),
            customer_email: self.customer_email.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            service_id: self.service_id,
            event_date: self.event_date,
            event_time: self.event_time.trim().to_string(),
            status: BookingStatus::Pending.to_string(),
            amount_minor: price_minor,
            notes: self.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDto {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_id: i64,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub status: BookingStatus,
    pub amount_minor: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BookingEntity> for BookingDto {
    fn from(value: BookingEntity) -> Self {
        Self {
            id: value.id,
            customer_name: value.customer_name,
            customer_email: value.customer_email,
            customer_phone: value.customer_phone,
            service_id: value.service_id,
            event_date: value.event_date,
            event_time: value.event_time,
            status: BookingStatus::from_str(&value.status).unwrap_or(BookingStatus::Pending),
            amount_minor: value.amount_minor,
            notes: value.notes,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListBookingsFilter {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<BookingStatus>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl ListBookingsFilter {
    pub fn offset(&self) -> i64 {
        let page = self.page.unwrap_or(1).max(1);
        (page - 1) * self.limit_or_default()
    }

    pub fn limit_or_default(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatusModel {
    pub status: BookingStatus,
}
