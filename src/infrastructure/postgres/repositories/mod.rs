pub mod admins;
pub mod analytics;
pub mod bookings;
pub mod contacts;
pub mod payments;
pub mod services;
