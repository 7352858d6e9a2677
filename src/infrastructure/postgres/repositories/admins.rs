use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;

use crate::{
    domain::{entities::admins::AdminEntity, repositories::admins::AdminRepository},
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::admins},
};

pub struct AdminPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AdminPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AdminRepository for AdminPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = admins::table
            .filter(admins::email.eq(email))
            .select(AdminEntity::as_select())
            .first::<AdminEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }
}
