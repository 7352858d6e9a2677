pub mod smtp_mailer;
pub mod templates;
