use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::services;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = services)]
pub struct ServiceEntity {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price_minor: i32,
    pub duration_min: i32,
    pub artist_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = services)]
pub struct InsertServiceEntity {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price_minor: i32,
    pub duration_min: i32,
    pub artist_id: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = services)]
pub struct EditServiceEntity {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price_minor: Option<i32>,
    pub duration_min: Option<i32>,
    pub is_active: Option<bool>,
}
