use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension,
};

use crate::db::queries::booking::{self as booking_queries, BookingOutcome};
use crate::db::queries::ride as ride_queries;
use crate::error::AppResult;
use crate::handlers::{parse_ride_id, render, ride_not_found};
use crate::utils::jwt::Claims;
use crate::views::{BookTemplate, Notice};
use crate::AppState;

/// Booking confirmation page
pub async fn book_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_ride_id(&id)?;
    let ride = ride_queries::find_ride(&state.db, id)
        .await?
        .ok_or_else(|| ride_not_found(id))?;

    Ok(render(BookTemplate { ride: ride.into() })?.into_response())
}

/// Book one seat for the authenticated rider
pub async fn book_confirmed(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let ride_id = parse_ride_id(&id)?;

    let notice = match booking_queries::book_seat(&state.db, ride_id, claims.sub).await {
        Ok(BookingOutcome::Booked { .. }) => Notice::Booked,
        Ok(BookingOutcome::NoSeats) => Notice::NoSeats,
        Ok(BookingOutcome::RideNotFound) => return Err(ride_not_found(ride_id)),
        Err(e) => {
            tracing::error!(ride_id, rider_id = claims.sub, error = %e, "Error booking ride");
            Notice::BookingFailed
        }
    };

    Ok(notice.redirect().into_response())
}
