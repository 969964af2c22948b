use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Database product model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub description: String,
}

/// Product choice offered by the movement form
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductOption {
    pub product_id: String,
    pub name: String,
}

/// Form body of `POST /add_product`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1))]
    pub product_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
}
