use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use sea_orm::prelude::Decimal;

use crate::entities::{booking, driver, ride};
use crate::error::AppResult;

/// A ride with its driver eagerly loaded. The driver is `None` only if the
/// foreign key dangles.
pub type RideWithDriver = (ride::Model, Option<driver::Model>);

/// The mutable fields of a ride, taken verbatim from the submitted form
#[derive(Debug, Clone, PartialEq)]
pub struct RideInput {
    pub start_location: String,
    pub end_location: String,
    pub driver_id: i32,
    pub available_seats: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { bookings_removed: u64 },
    NotFound,
}

/// All rides, newest first
pub async fn list_rides(db: &DatabaseConnection) -> AppResult<Vec<RideWithDriver>> {
    let rides = ride::Entity::find()
        .find_also_related(driver::Entity)
        .order_by_desc(ride::Column::Id)
        .all(db)
        .await?;

    Ok(rides)
}

pub async fn find_ride(db: &DatabaseConnection, id: i32) -> AppResult<Option<RideWithDriver>> {
    let ride = ride::Entity::find_by_id(id)
        .find_also_related(driver::Entity)
        .one(db)
        .await?;

    Ok(ride)
}

pub async fn create_ride(db: &DatabaseConnection, input: RideInput) -> AppResult<ride::Model> {
    let new_ride = ride::ActiveModel {
        start_location: Set(input.start_location),
        end_location: Set(input.end_location),
        driver_id: Set(input.driver_id),
        available_seats: Set(input.available_seats),
        price: Set(input.price),
        ..Default::default()
    };

    let ride = new_ride.insert(db).await?;
    tracing::info!(ride_id = ride.id, driver_id = ride.driver_id, "Ride created");

    Ok(ride)
}

/// Overwrite every mutable field of the ride. Last write wins.
pub async fn update_ride(
    db: &DatabaseConnection,
    id: i32,
    input: RideInput,
) -> AppResult<Option<ride::Model>> {
    let Some(existing) = ride::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: ride::ActiveModel = existing.into();
    active.start_location = Set(input.start_location);
    active.end_location = Set(input.end_location);
    active.driver_id = Set(input.driver_id);
    active.available_seats = Set(input.available_seats);
    active.price = Set(input.price);

    let updated = active.update(db).await?;
    tracing::info!(ride_id = updated.id, "Ride updated");

    Ok(Some(updated))
}

/// Delete a ride and all of its bookings in one transaction
pub async fn delete_ride(db: &DatabaseConnection, id: i32) -> AppResult<DeleteOutcome> {
    let txn = db.begin().await?;

    let Some(ride) = ride::Entity::find_by_id(id).one(&txn).await? else {
        return Ok(DeleteOutcome::NotFound);
    };

    let bookings_removed = booking::Entity::delete_many()
        .filter(booking::Column::RideId.eq(ride.id))
        .exec(&txn)
        .await?
        .rows_affected;

    ride::Entity::delete_by_id(ride.id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(ride_id = id, bookings_removed, "Ride deleted");

    Ok(DeleteOutcome::Deleted { bookings_removed })
}
