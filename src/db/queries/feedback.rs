use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::entities::feedback;
use crate::error::AppResult;

/// Store already-validated feedback, stamped with the current time
pub async fn submit_feedback(
    db: &DatabaseConnection,
    customer_name: String,
    comments: String,
) -> AppResult<feedback::Model> {
    let new_feedback = feedback::ActiveModel {
        customer_name: Set(customer_name),
        comments: Set(comments),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let saved = new_feedback.insert(db).await?;
    tracing::info!(feedback_id = saved.id, "Feedback received");

    Ok(saved)
}
