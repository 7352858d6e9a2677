use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::{
    domain::{
        entities::{
            artists::ArtistEntity,
            services::{EditServiceEntity, InsertServiceEntity, ServiceEntity},
        },
        repositories::services::ServiceRepository,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{artists, services},
    },
};

pub struct ServicePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ServicePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ServiceRepository for ServicePostgres {
    async fn find_active_by_id(&self, service_id: i64) -> Result<Option<ServiceEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = services::table
            .filter(services::id.eq(service_id))
            .filter(services::is_active.eq(true))
            .select(ServiceEntity::as_select())
            .first::<ServiceEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list_active(&self) -> Result<Vec<ServiceEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = services::table
            .filter(services::is_active.eq(true))
            .order(services::category.asc())
            .select(ServiceEntity::as_select())
            .load::<ServiceEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_artist_for_service(&self, service_id: i64) -> Result<Option<ArtistEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = services::table
            .inner_join(artists::table)
            .filter(services::id.eq(service_id))
            .filter(artists::is_active.eq(true))
            .select(ArtistEntity::as_select())
            .first::<ArtistEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn create(&self, service_entity: InsertServiceEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let service_id = insert_into(services::table)
            .values(&service_entity)
            .returning(services::id)
            .get_result::<i64>(&mut conn)?;

        Ok(service_id)
    }

    async fn update(&self, service_id: i64, edit_entity: EditServiceEntity) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(services::table)
            .filter(services::id.eq(service_id))
            .set(&edit_entity)
            .execute(&mut conn)?;

        Ok(affected == 1)
    }

    async fn deactivate(&self, service_id: i64) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(services::table)
            .filter(services::id.eq(service_id))
            .set(services::is_active.eq(false))
            .execute(&mut conn)?;

        Ok(affected == 1)
    }
}
