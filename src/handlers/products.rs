use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use validator::Validate;

use super::{AppState, render};
use crate::{
    error::Result,
    models::{NewProduct, Product},
};

#[derive(Template)]
#[template(path = "products.html")]
struct ProductsTemplate {
    products: Vec<Product>,
}

#[derive(Template)]
#[template(path = "add_product.html")]
struct AddProductTemplate {}

/// Get all products handler
pub async fn list_products(State(state): State<AppState>) -> Result<Html<String>> {
    let products = state.products.list_products().await?;
    render(ProductsTemplate { products })
}

pub async fn add_product_form() -> Result<Html<String>> {
    render(AddProductTemplate {})
}

/// Create product handler, redirects to the fresh listing
pub async fn add_product(
    State(state): State<AppState>,
    Form(product): Form<NewProduct>,
) -> Result<Redirect> {
    product.validate()?;
    state.products.create_product(&product).await?;
    Ok(Redirect::to("/products"))
}
