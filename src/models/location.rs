use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Database location model, also used as a form choice
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub location_id: String,
    pub name: String,
}

/// Form body of `POST /add_location`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewLocation {
    #[validate(length(min = 1))]
    pub location_id: String,
    #[validate(length(min = 1))]
    pub name: String,
}
