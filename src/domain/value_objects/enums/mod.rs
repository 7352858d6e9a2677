pub mod booking_statuses;
pub mod payment_statuses;
pub mod sort_order;
