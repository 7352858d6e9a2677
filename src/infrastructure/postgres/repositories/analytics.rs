use anyhow::Result;
use async_trait::async_trait;
use diesel::{
    RunQueryDsl,
    dsl::{count_star, sum},
    prelude::*,
    sql_query,
    sql_types::{BigInt, Integer, Text},
};
use std::sync::Arc;

use crate::{
    domain::{
        repositories::analytics::AnalyticsRepository,
        value_objects::{
            analytics::{CategoryRevenueDto, MonthlyCountDto, StatusCountDto},
            enums::payment_statuses::PaymentStatus,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{bookings, contacts, payments},
    },
};

pub struct AnalyticsPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AnalyticsPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[derive(QueryableByName)]
struct MonthlyCountRow {
    #[diesel(sql_type = Text)]
    month: String,
    #[diesel(sql_type = BigInt)]
    count: i64,
}

#[derive(QueryableByName)]
struct CategoryRevenueRow {
    #[diesel(sql_type = Text)]
    category: String,
    #[diesel(sql_type = BigInt)]
    revenue_minor: i64,
}

#[async_trait]
impl AnalyticsRepository for AnalyticsPostgres {
    async fn booking_status_counts(&self) -> Result<Vec<StatusCountDto>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = bookings::table
            .group_by(bookings::status)
            .select((bookings::status, count_star()))
            .load::<(String, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| StatusCountDto { status, count })
            .collect())
    }

    async fn completed_revenue_minor(&self) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = payments::table
            .filter(payments::status.eq(PaymentStatus::Completed.to_string()))
            .select(sum(payments::amount_minor))
            .first::<Option<i64>>(&mut conn)?;

        Ok(total.unwrap_or(0))
    }

    async fn unread_contact_count(&self) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = contacts::table
            .filter(contacts::is_read.eq(false))
            .select(count_star())
            .first::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn bookings_per_month(&self, months: i32) -> Result<Vec<MonthlyCountDto>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = sql_query(
            "SELECT to_char(date_trunc('month', created_at), 'YYYY-MM') AS month, \
             COUNT(*) AS count \
             FROM bookings \
             WHERE created_at >= now() - make_interval(months => $1) \
             GROUP BY 1 \
             ORDER BY 1",
        )
        .bind::<Integer, _>(months)
        .load::<MonthlyCountRow>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|row| MonthlyCountDto {
                month: row.month,
                count: row.count,
            })
            .collect())
    }

    async fn revenue_by_category(&self) -> Result<Vec<CategoryRevenueDto>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = sql_query(
            "SELECT s.category AS category, \
             COALESCE(SUM(p.amount_minor), 0)::bigint AS revenue_minor \
             FROM payments p \
             JOIN bookings b ON b.id = p.booking_id \
             JOIN services s ON s.id = b.service_id \
             WHERE p.status = 'completed' \
             GROUP BY s.category \
             ORDER BY revenue_minor DESC",
        )
        .load::<CategoryRevenueRow>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryRevenueDto {
                category: row.category,
                revenue_minor: row.revenue_minor,
            })
            .collect())
    }
}
