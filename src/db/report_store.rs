use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::ReportRow,
};

/// Net quantity per product and location, summed over the whole ledger.
///
/// Every product is paired with every location; pairs without movements
/// come out as 0. Grouping is by id so products or locations sharing a name
/// stay separate rows.
const REPORT_QUERY: &str = r#"
    SELECT p.name AS product, l.name AS location,
           COALESCE(SUM(CASE WHEN pm.to_location = l.location_id THEN pm.qty ELSE 0 END), 0)
         - COALESCE(SUM(CASE WHEN pm.from_location = l.location_id THEN pm.qty ELSE 0 END), 0)
           AS qty
    FROM product p
    CROSS JOIN location l
    LEFT JOIN product_movement pm ON pm.product_id = p.product_id
    GROUP BY p.product_id, l.location_id, p.name, l.name
    ORDER BY p.name, l.name
"#;

#[derive(Clone)]
pub struct ReportStore {
    pool: DbPool,
}

impl ReportStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Recompute the stock report, ordered by product name then location name
    pub async fn compute_report(&self) -> Result<Vec<ReportRow>> {
        let rows = sqlx::query_as::<_, ReportRow>(REPORT_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(rows)
    }
}
