use askama::Template;
use axum::{
    Router,
    response::{Html, Redirect},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    db::{DbPool, LocationStore, MovementStore, ProductStore, ReportStore},
    error::Result,
};

pub mod locations;
pub mod movements;
pub mod products;
pub mod report;

/// Shared state of all page handlers
#[derive(Clone)]
pub struct AppState {
    pub products: ProductStore,
    pub locations: LocationStore,
    pub movements: MovementStore,
    pub reports: ReportStore,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            products: ProductStore::new(pool.clone()),
            locations: LocationStore::new(pool.clone()),
            movements: MovementStore::new(pool.clone()),
            reports: ReportStore::new(pool),
        }
    }
}

/// Build the application router with request tracing
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/products", get(products::list_products))
        .route(
            "/add_product",
            get(products::add_product_form).post(products::add_product),
        )
        .route("/locations", get(locations::list_locations))
        .route(
            "/add_location",
            get(locations::add_location_form).post(locations::add_location),
        )
        .route("/movements", get(movements::list_movements))
        .route(
            "/add_movement",
            get(movements::add_movement_form).post(movements::add_movement),
        )
        .route("/report", get(report::show_report))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to("/products")
}

/// Render a page template into an HTML response
pub(crate) fn render(template: impl Template) -> Result<Html<String>> {
    Ok(Html(template.render()?))
}
