use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::entities::booking::{self, BookingStatus};
use crate::entities::ride;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Booked {
        booking: booking::Model,
        remaining_seats: i32,
    },
    /// The ride was full when the seat was claimed; nothing was written
    NoSeats,
    RideNotFound,
}

/// Claim one seat on `ride_id` for `rider_id`.
///
/// The seat count is decremented with a conditional update
/// (`available_seats >= 1`) evaluated by the store, so concurrent bookings
/// against the last seat cannot both succeed. The decrement and the booking
/// row commit together or not at all.
pub async fn book_seat(
    db: &DatabaseConnection,
    ride_id: i32,
    rider_id: i32,
) -> AppResult<BookingOutcome> {
    let txn = db.begin().await?;

    if ride::Entity::find_by_id(ride_id).one(&txn).await?.is_none() {
        return Ok(BookingOutcome::RideNotFound);
    }

    let claimed = ride::Entity::update_many()
        .col_expr(
            ride::Column::AvailableSeats,
            Expr::col(ride::Column::AvailableSeats).sub(1),
        )
        .filter(ride::Column::Id.eq(ride_id))
        .filter(ride::Column::AvailableSeats.gte(1))
        .exec(&txn)
        .await?;

    if claimed.rows_affected == 0 {
        tracing::info!(ride_id, rider_id, "Booking rejected, no seats available");
        return Ok(BookingOutcome::NoSeats);
    }

    let new_booking = booking::ActiveModel {
        ride_id: Set(ride_id),
        rider_id: Set(rider_id),
        status: Set(BookingStatus::Confirmed),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    let booking = new_booking.insert(&txn).await?;

    let remaining_seats = ride::Entity::find_by_id(ride_id)
        .one(&txn)
        .await?
        .map(|r| r.available_seats)
        .unwrap_or_default();

    txn.commit().await?;

    tracing::info!(
        booking_id = booking.id,
        ride_id,
        rider_id,
        remaining_seats,
        "Ride booked"
    );

    Ok(BookingOutcome::Booked {
        booking,
        remaining_seats,
    })
}

pub async fn bookings_for_ride(
    db: &DatabaseConnection,
    ride_id: i32,
) -> AppResult<Vec<booking::Model>> {
    let bookings = booking::Entity::find()
        .filter(booking::Column::RideId.eq(ride_id))
        .all(db)
        .await?;

    Ok(bookings)
}
