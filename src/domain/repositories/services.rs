use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::artists::ArtistEntity;
use crate::domain::entities::services::{
    EditServiceEntity, InsertServiceEntity, ServiceEntity,
};

#[async_trait]
#[automock]
pub trait ServiceRepository {
    async fn find_active_by_id(&self, service_id: i64) -> Result<Option<ServiceEntity>>;
    async fn list_active(&self) -> Result<Vec<ServiceEntity>>;
    async fn find_artist_for_service(&self, service_id: i64) -> Result<Option<ArtistEntity>>;
    async fn create(&self, service_entity: InsertServiceEntity) -> Result<i64>;
    /// Returns whether a row was updated.
    async fn update(&self, service_id: i64, edit_entity: EditServiceEntity) -> Result<bool>;
    /// Soft delete: flips `is_active` off, keeping the row for history.
    /// Returns whether a row was updated.
    async fn deactivate(&self, service_id: i64) -> Result<bool>;
}
