use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    auth,
    config::config_loader,
    domain::{
        repositories::admins::AdminRepository,
        value_objects::admins::{AdminLoginModel, AdminTokenDto},
    },
};

#[derive(Debug, Error)]
pub enum AdminAuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AdminAuthError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AdminAuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AdminAuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AdminAuthError>;

pub struct AdminAuthUseCase<A>
where
    A: AdminRepository + Send + Sync + 'static,
{
    admin_repo: Arc<A>,
}

impl<A> AdminAuthUseCase<A>
where
    A: AdminRepository + Send + Sync + 'static,
{
    pub fn new(admin_repo: Arc<A>) -> Self {
        Self { admin_repo }
    }

    pub async fn login(&self, model: AdminLoginModel) -> UseCaseResult<AdminTokenDto> {
        let email = model.email.trim().to_lowercase();

        let admin = self
            .admin_repo
            .find_by_email(&email)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "admin auth: failed to load admin");
                AdminAuthError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(email = %email, "admin auth: unknown admin email");
                AdminAuthError::InvalidCredentials
            })?;

        if !auth::verify_password(&model.password, &admin.password_hash) {
            warn!(email = %email, "admin auth: password mismatch");
            return Err(AdminAuthError::InvalidCredentials);
        }

        let secret = config_loader::get_admin_secret().map_err(AdminAuthError::Internal)?;
        let token = auth::generate_admin_token(&secret, admin.id, &admin.email)
            .map_err(|err| AdminAuthError::Internal(anyhow::anyhow!("{:?}", err)))?;

        info!(admin_id = %admin.id, "admin auth: login succeeded");
        Ok(AdminTokenDto { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::env;
    use uuid::Uuid;

    use crate::domain::{
        entities::admins::AdminEntity, repositories::admins::MockAdminRepository,
    };

    fn set_env_vars() {
        unsafe {
            env::set_var("JWT_ADMIN_SECRET", "supersecretjwtsecretforunittesting123");
            env::set_var("JWT_ADMIN_TTL_SECONDS", "3600");
        }
    }

    fn stored_admin(password: &str) -> AdminEntity {
        AdminEntity {
            id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            password_hash: auth::hash_password(password).unwrap(),
            display_name: "Studio Admin".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn issues_a_token_for_valid_credentials() {
        set_env_vars();
        let admin = stored_admin("hunter2hunter2");

        let mut admin_repo = MockAdminRepository::new();
        admin_repo.expect_find_by_email().returning(move |_| {
            let admin = admin.clone();
            Box::pin(async move { Ok(Some(admin)) })
        });

        let usecase = AdminAuthUseCase::new(Arc::new(admin_repo));
        let response = usecase
            .login(AdminLoginModel {
                email: "Admin@Example.com ".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .expect("login should succeed");

        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn rejects_a_wrong_password() {
        set_env_vars();
        let admin = stored_admin("hunter2hunter2");

        let mut admin_repo = MockAdminRepository::new();
        admin_repo.expect_find_by_email().returning(move |_| {
            let admin = admin.clone();
            Box::pin(async move { Ok(Some(admin)) })
        });

        let usecase = AdminAuthUseCase::new(Arc::new(admin_repo));
        let result = usecase
            .login(AdminLoginModel {
                email: "admin@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AdminAuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn rejects_an_unknown_email() {
        set_env_vars();

        let mut admin_repo = MockAdminRepository::new();
        admin_repo
            .expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = AdminAuthUseCase::new(Arc::new(admin_repo));
        let result = usecase
            .login(AdminLoginModel {
                email: "nobody@example.com".to_string(),
                password: "whatever".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AdminAuthError::InvalidCredentials)));
    }
}
