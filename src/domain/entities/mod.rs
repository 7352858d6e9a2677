pub mod admins;
pub mod artists;
pub mod bookings;
pub mod contacts;
pub mod customers;
pub mod payments;
pub mod services;
