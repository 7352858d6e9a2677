use super::*;
use crate::config::config_model::AdminSecret;
use std::env;

fn set_env_vars() {
    unsafe {
        env::set_var("JWT_ADMIN_SECRET", "supersecretjwtsecretforunittesting123");
        env::set_var("JWT_ADMIN_TTL_SECONDS", "3600");
    }
}

fn admin_secret(secret: &str) -> AdminSecret {
    AdminSecret {
        secret: secret.to_string(),
        token_ttl_seconds: 3600,
    }
}

#[test]
fn test_validate_admin_token_success() {
    set_env_vars();
    let admin_id = Uuid::new_v4();
    let token = generate_admin_token(
        &admin_secret("supersecretjwtsecretforunittesting123"),
        admin_id,
        "admin@example.com",
    )
    .unwrap();

    let claims = validate_admin_token(&token).expect("Valid token should pass");
    assert_eq!(claims.sub, admin_id.to_string());
    assert_eq!(claims.email, "admin@example.com");
}

#[test]
fn test_validate_admin_token_expired() {
    set_env_vars();
    let secret = "supersecretjwtsecretforunittesting123";
    let my_claims = AdminClaims {
        sub: Uuid::new_v4().to_string(),
        email: "admin@example.com".to_string(),
        exp: 1, // past
    };

    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &my_claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    let result = validate_admin_token(&token);
    assert!(result.is_err());
}

#[test]
fn test_validate_admin_token_invalid_signature() {
    set_env_vars();
    let token = generate_admin_token(
        &admin_secret("wrongsecret"),
        Uuid::new_v4(),
        "admin@example.com",
    )
    .unwrap();

    let result = validate_admin_token(&token);
    assert!(result.is_err());
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("correct horse battery staple").unwrap();
    assert!(verify_password("correct horse battery staple", &hash));
    assert!(!verify_password("wrong password", &hash));
}

#[test]
fn test_verify_password_rejects_garbage_hash() {
    assert!(!verify_password("anything", "not-a-phc-string"));
}
