use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusCountDto {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyCountDto {
    pub month: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRevenueDto {
    pub category: String,
    pub revenue_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummaryDto {
    pub bookings_by_status: Vec<StatusCountDto>,
    pub completed_revenue_minor: i64,
    pub unread_contacts: i64,
    pub bookings_per_month: Vec<MonthlyCountDto>,
    pub revenue_by_category: Vec<CategoryRevenueDto>,
}
