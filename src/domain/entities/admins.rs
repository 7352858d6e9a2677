use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::admins;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = admins)]
pub struct AdminEntity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}
