pub mod axum_http;
pub mod email;
pub mod gateway;
pub mod postgres;
