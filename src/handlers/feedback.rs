use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::db::queries::feedback as feedback_queries;
use crate::error::AppResult;
use crate::handlers::render;
use crate::utils::validation::validate_feedback;
use crate::views::FeedbackTemplate;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeedbackForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub comments: String,
}

pub async fn feedback_form() -> AppResult<Response> {
    Ok(render(FeedbackTemplate::empty())?.into_response())
}

/// Validate and store feedback, then return to the landing page
pub async fn submit_feedback(
    State(state): State<AppState>,
    Form(form): Form<FeedbackForm>,
) -> AppResult<Response> {
    if let Err(errors) = validate_feedback(&form.customer_name, &form.comments) {
        tracing::debug!(%errors, "Feedback rejected");
        let page = FeedbackTemplate {
            customer_name_error: errors.first("CustomerName"),
            comments_error: errors.first("Comments"),
            customer_name: form.customer_name,
            comments: form.comments,
            error: None,
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, render(page)?).into_response());
    }

    match feedback_queries::submit_feedback(
        &state.db,
        form.customer_name.clone(),
        form.comments.clone(),
    )
    .await
    {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to save feedback");
            let page = FeedbackTemplate {
                customer_name: form.customer_name,
                comments: form.comments,
                customer_name_error: None,
                comments_error: None,
                error: Some("Your feedback could not be saved. Please try again.".to_string()),
            };
            Ok((StatusCode::INTERNAL_SERVER_ERROR, render(page)?).into_response())
        }
    }
}
