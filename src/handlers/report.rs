use askama::Template;
use axum::{extract::State, response::Html};

use super::{AppState, render};
use crate::{error::Result, models::ReportRow};

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate {
    rows: Vec<ReportRow>,
}

/// Stock report handler, recomputed from the ledger on every request
pub async fn show_report(State(state): State<AppState>) -> Result<Html<String>> {
    let rows = state.reports.compute_report().await?;
    render(ReportTemplate { rows })
}
