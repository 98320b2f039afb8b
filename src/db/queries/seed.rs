use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::entities::{driver, user};
use crate::error::{AppError, AppResult};
use crate::utils::validation::validate_user;

const DEFAULT_DRIVER_NAME: &str = "Default Driver";
const DEFAULT_RIDER_NAME: &str = "Default Rider";
const DEFAULT_RIDER_EMAIL: &str = "rider@ridesharing.local";
const DEFAULT_RIDER_ROLE: &str = "Rider";

/// Seed one driver and one rider if their tables are empty, so a fresh
/// install can create and book rides straight away
pub async fn seed_defaults(db: &DatabaseConnection) -> AppResult<()> {
    if driver::Entity::find().count(db).await? == 0 {
        let driver = driver::ActiveModel {
            name: Set(DEFAULT_DRIVER_NAME.to_string()),
            phone_number: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await?;
        tracing::info!(driver_id = driver.id, "Default driver created");
    }

    if user::Entity::find().count(db).await? == 0 {
        validate_user(DEFAULT_RIDER_NAME, DEFAULT_RIDER_EMAIL, None, DEFAULT_RIDER_ROLE)
            .map_err(|e| AppError::Internal(format!("Invalid default rider: {}", e)))?;

        let rider = user::ActiveModel {
            name: Set(DEFAULT_RIDER_NAME.to_string()),
            email: Set(DEFAULT_RIDER_EMAIL.to_string()),
            phone_number: Set(None),
            role: Set(DEFAULT_RIDER_ROLE.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        tracing::info!(user_id = rider.id, email = %rider.email, "Default rider created");
    }

    Ok(())
}
