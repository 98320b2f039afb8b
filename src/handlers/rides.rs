use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::db::queries::ride::{self as ride_queries, DeleteOutcome, RideInput};
use crate::error::AppResult;
use crate::handlers::{parse_ride_id, render, ride_not_found};
use crate::views::{
    DeleteTemplate, Notice, RideDetailsTemplate, RideFormTemplate, RideFormValues,
    RideListTemplate, RideRow,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RideListParams {
    pub notice: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RideForm {
    pub start_location: String,
    pub end_location: String,
    pub driver_id: i32,
    pub available_seats: i32,
    pub price: Decimal,
}

impl From<RideForm> for RideInput {
    fn from(form: RideForm) -> Self {
        RideInput {
            start_location: form.start_location,
            end_location: form.end_location,
            driver_id: form.driver_id,
            available_seats: form.available_seats,
            price: form.price,
        }
    }
}

/// List all rides, newest first
pub async fn list_rides(
    State(state): State<AppState>,
    Query(params): Query<RideListParams>,
) -> AppResult<Response> {
    let notice = params
        .notice
        .as_deref()
        .and_then(Notice::from_key)
        .map(Into::into);

    match ride_queries::list_rides(&state.db).await {
        Ok(rides) => {
            let page = RideListTemplate {
                rides: rides.into_iter().map(RideRow::from).collect(),
                notice,
                load_error: None,
            };
            Ok(render(page)?.into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching rides");
            let page = RideListTemplate {
                rides: Vec::new(),
                notice,
                load_error: Some(
                    "Rides could not be loaded right now. Please try again later.".to_string(),
                ),
            };
            Ok((StatusCode::SERVICE_UNAVAILABLE, render(page)?).into_response())
        }
    }
}

/// New ride form
pub async fn create_form() -> AppResult<Response> {
    Ok(render(RideFormTemplate::create(RideFormValues::default(), None))?.into_response())
}

/// Create a ride from the submitted form
pub async fn create_ride(
    State(state): State<AppState>,
    Form(form): Form<RideForm>,
) -> AppResult<Response> {
    let input = RideInput::from(form);
    let values = RideFormValues::from(&input);

    match ride_queries::create_ride(&state.db, input).await {
        Ok(_) => Ok(Redirect::to("/RideList").into_response()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create ride");
            let page = RideFormTemplate::create(
                values,
                Some("Failed to create ride. Check that the driver exists and try again.".to_string()),
            );
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render(page)?).into_response())
        }
    }
}

/// Single ride view
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_ride_id(&id)?;
    let ride = ride_queries::find_ride(&state.db, id)
        .await?
        .ok_or_else(|| ride_not_found(id))?;

    Ok(render(RideDetailsTemplate { ride: ride.into() })?.into_response())
}

/// Edit form prefilled with the stored ride
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_ride_id(&id)?;
    let (ride, _) = ride_queries::find_ride(&state.db, id)
        .await?
        .ok_or_else(|| ride_not_found(id))?;

    let page = RideFormTemplate::edit(ride.id, RideFormValues::from(&ride), None);
    Ok(render(page)?.into_response())
}

/// Overwrite a ride with the submitted form
pub async fn update_ride(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<RideForm>,
) -> AppResult<Response> {
    let id = parse_ride_id(&id)?;
    let input = RideInput::from(form);
    let values = RideFormValues::from(&input);

    match ride_queries::update_ride(&state.db, id, input).await {
        Ok(Some(_)) => Ok(Redirect::to("/RideList").into_response()),
        Ok(None) => Err(ride_not_found(id)),
        Err(e) => {
            tracing::error!(ride_id = id, error = %e, "Error updating ride");
            let page = RideFormTemplate::edit(
                id,
                values,
                Some("Error updating ride. Check that the driver exists and try again.".to_string()),
            );
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render(page)?).into_response())
        }
    }
}

/// Delete confirmation page
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_ride_id(&id)?;
    let ride = ride_queries::find_ride(&state.db, id)
        .await?
        .ok_or_else(|| ride_not_found(id))?;

    Ok(render(DeleteTemplate { ride: ride.into() })?.into_response())
}

/// Delete a ride together with its bookings
pub async fn delete_ride(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_ride_id(&id)?;

    let notice = match ride_queries::delete_ride(&state.db, id).await {
        Ok(DeleteOutcome::Deleted { .. }) => Notice::Deleted,
        Ok(DeleteOutcome::NotFound) => return Err(ride_not_found(id)),
        Err(e) => {
            tracing::error!(ride_id = id, error = %e, "Error deleting ride");
            Notice::DeleteFailed
        }
    };

    Ok(notice.redirect().into_response())
}
