use serde::Serialize;
use sqlx::FromRow;

/// Net quantity of one product at one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ReportRow {
    pub product: String,
    pub location: String,
    pub qty: i64,
}
