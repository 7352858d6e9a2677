use diesel::prelude::*;

use crate::infrastructure::postgres::schema::customers;

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = customers)]
pub struct UpsertCustomerEntity {
    pub name: String,
    pub email: String,
    pub phone: String,
}
