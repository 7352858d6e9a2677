use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::artists;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = artists)]
pub struct ArtistEntity {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
