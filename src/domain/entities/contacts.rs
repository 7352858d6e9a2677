use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::contacts;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = contacts)]
pub struct ContactEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub struct InsertContactEntity {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}
