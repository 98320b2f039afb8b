use axum::response::Html;

use crate::error::{AppError, AppResult};
use crate::handlers::render;
use crate::views::{IndexTemplate, PrivacyTemplate};

/// Landing page
pub async fn index() -> AppResult<Html<String>> {
    render(IndexTemplate)
}

pub async fn privacy() -> AppResult<Html<String>> {
    render(PrivacyTemplate)
}

/// Fallback for unknown routes, including id-less ride routes such as `/Details`
pub async fn not_found() -> AppError {
    AppError::NotFound("No such page".to_string())
}
