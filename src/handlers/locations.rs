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
    models::{Location, NewLocation},
};

#[derive(Template)]
#[template(path = "locations.html")]
struct LocationsTemplate {
    locations: Vec<Location>,
}

#[derive(Template)]
#[template(path = "add_location.html")]
struct AddLocationTemplate {}

pub async fn list_locations(State(state): State<AppState>) -> Result<Html<String>> {
    let locations = state.locations.list_locations().await?;
    render(LocationsTemplate { locations })
}

pub async fn add_location_form() -> Result<Html<String>> {
    render(AddLocationTemplate {})
}

pub async fn add_location(
    State(state): State<AppState>,
    Form(location): Form<NewLocation>,
) -> Result<Redirect> {
    location.validate()?;
    state.locations.create_location(&location).await?;
    Ok(Redirect::to("/locations"))
}
