use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::{
    domain::{
        entities::contacts::{ContactEntity, InsertContactEntity},
        repositories::contacts::ContactRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::contacts},
};

pub struct ContactPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ContactPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ContactRepository for ContactPostgres {
    async fn create(&self, contact_entity: InsertContactEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let contact_id = insert_into(contacts::table)
            .values(&contact_entity)
            .returning(contacts::id)
            .get_result::<i64>(&mut conn)?;

        Ok(contact_id)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<ContactEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = contacts::table
            .order(contacts::created_at.desc())
            .offset(offset)
            .limit(limit)
            .select(ContactEntity::as_select())
            .load::<ContactEntity>(&mut conn)?;

        Ok(results)
    }

    async fn mark_read(&self, contact_id: i64) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(contacts::table)
            .filter(contacts::id.eq(contact_id))
            .set(contacts::is_read.eq(true))
            .execute(&mut conn)?;

        Ok(affected == 1)
    }

    async fn delete(&self, contact_id: i64) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        delete(contacts::table.filter(contacts::id.eq(contact_id))).execute(&mut conn)?;

        Ok(())
    }
}
