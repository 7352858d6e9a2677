use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::contacts::{ContactEntity, InsertContactEntity};

#[async_trait]
#[automock]
pub trait ContactRepository {
    async fn create(&self, contact_entity: InsertContactEntity) -> Result<i64>;
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<ContactEntity>>;
    async fn mark_read(&self, contact_id: i64) -> Result<bool>;
    async fn delete(&self, contact_id: i64) -> Result<()>;
}
