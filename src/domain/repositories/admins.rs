use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::admins::AdminEntity;

#[async_trait]
#[automock]
pub trait AdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminEntity>>;
}
