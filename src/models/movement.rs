use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::{Location, ProductOption};

/// Movement row as shown in the listing, joined with product and location names.
///
/// Location ids are `None` for stock entering or leaving the system. The
/// names are `None` as well when the id does not resolve to a location.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movement {
    pub movement_id: i64,
    pub timestamp: DateTime<Utc>,
    pub product_id: String,
    pub product_name: String,
    pub from_location: Option<String>,
    pub from_location_name: Option<String>,
    pub to_location: Option<String>,
    pub to_location_name: Option<String>,
    pub qty: i64,
}

/// Choices for the selection inputs of the movement form
#[derive(Debug, Clone)]
pub struct MovementFormData {
    pub products: Vec<ProductOption>,
    pub locations: Vec<Location>,
}

/// Form body of `POST /add_movement`
///
/// The location selects submit an empty string for "none"; use
/// [`NewMovement::from_location`] and [`NewMovement::to_location`] to read
/// them normalized.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_endpoints"))]
pub struct NewMovement {
    #[validate(length(min = 1))]
    pub product_id: String,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    #[validate(range(min = 1))]
    pub qty: i64,
}

impl NewMovement {
    pub fn from_location(&self) -> Option<&str> {
        non_empty(&self.from_location)
    }

    pub fn to_location(&self) -> Option<&str> {
        non_empty(&self.to_location)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn validate_endpoints(movement: &NewMovement) -> Result<(), ValidationError> {
    if movement.from_location().is_none() && movement.to_location().is_none() {
        return Err(ValidationError::new("missing_endpoint")
            .with_message("a movement needs a source or a destination location".into()));
    }
    Ok(())
}

impl Movement {
    /// Source shown in listings: location name, else the raw id, else "External"
    pub fn from_label(&self) -> &str {
        location_label(&self.from_location_name, &self.from_location)
    }

    /// Destination shown in listings: location name, else the raw id, else "External"
    pub fn to_label(&self) -> &str {
        location_label(&self.to_location_name, &self.to_location)
    }
}

fn location_label<'a>(name: &'a Option<String>, id: &'a Option<String>) -> &'a str {
    name.as_deref().or(id.as_deref()).unwrap_or("External")
}
