use anyhow::{Ok, Result};

use super::config_model::{AdminSecret, DotEnvyConfig};
use crate::config::stage::Stage;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = super::config_model::Server {
        port: std::env::var("SERVER_PORT")
            .expect("SERVER_PORT is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let database = super::config_model::Database {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL is invalid"),
    };

    let razorpay = super::config_model::Razorpay {
        key_id: std::env::var("RAZORPAY_KEY_ID").expect("RAZORPAY_KEY_ID is invalid"),
        key_secret: std::env::var("RAZORPAY_KEY_SECRET").expect("RAZORPAY_KEY_SECRET is invalid"),
        currency: std::env::var("RAZORPAY_CURRENCY").unwrap_or_else(|_| "INR".to_string()),
        timeout_seconds: std::env::var("RAZORPAY_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?,
    };

    let smtp = super::config_model::Smtp {
        host: std::env::var("SMTP_HOST").expect("SMTP_HOST is invalid"),
        port: std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()?,
        username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME is invalid"),
        password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD is invalid"),
        from_email: std::env::var("SMTP_FROM_EMAIL").expect("SMTP_FROM_EMAIL is invalid"),
        from_name: std::env::var("SMTP_FROM_NAME").unwrap_or_else(|_| "Blushbook".to_string()),
    };

    let base_url = std::env::var("BASE_URL").expect("BASE_URL is invalid");

    Ok(DotEnvyConfig {
        server,
        database,
        razorpay,
        smtp,
        base_url,
    })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = std::env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(stage_str.as_str()).unwrap_or_default()
}

pub fn get_admin_secret() -> Result<AdminSecret> {
    dotenvy::dotenv().ok();

    Ok(AdminSecret {
        secret: std::env::var("JWT_ADMIN_SECRET").expect("JWT_ADMIN_SECRET is invalid"),
        token_ttl_seconds: std::env::var("JWT_ADMIN_TTL_SECONDS")
            .unwrap_or_else(|_| "28800".to_string())
            .parse()?,
    })
}
