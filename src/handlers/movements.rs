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
    models::{Location, Movement, NewMovement, ProductOption},
};

#[derive(Template)]
#[template(path = "movements.html")]
struct MovementsTemplate {
    movements: Vec<Movement>,
}

#[derive(Template)]
#[template(path = "add_movement.html")]
struct AddMovementTemplate {
    products: Vec<ProductOption>,
    locations: Vec<Location>,
}

pub async fn list_movements(State(state): State<AppState>) -> Result<Html<String>> {
    let movements = state.movements.list_movements().await?;
    render(MovementsTemplate { movements })
}

/// Movement form, populated with the current products and locations
pub async fn add_movement_form(State(state): State<AppState>) -> Result<Html<String>> {
    let data = state.movements.movement_form_data().await?;
    render(AddMovementTemplate {
        products: data.products,
        locations: data.locations,
    })
}

/// Record a movement handler.
///
/// Input is checked for shape only; ids that match no product or location
/// are accepted.
pub async fn add_movement(
    State(state): State<AppState>,
    Form(movement): Form<NewMovement>,
) -> Result<Redirect> {
    movement.validate()?;
    state.movements.create_movement(&movement).await?;
    Ok(Redirect::to("/movements"))
}
