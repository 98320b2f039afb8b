pub mod booking;
pub mod feedback;
pub mod home;
pub mod rides;
pub mod session;

use askama::Template;
use axum::response::Html;

use crate::error::{AppError, AppResult};

pub(crate) fn render<T: Template>(template: T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

/// Parse a ride id path segment. Malformed and unknown ids look the same
/// to the caller.
pub(crate) fn parse_ride_id(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::NotFound(format!("Invalid ride id: {}", raw)))
}

pub(crate) fn ride_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Ride {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ride_id() {
        assert_eq!(parse_ride_id("42").unwrap(), 42);
        assert!(matches!(parse_ride_id("abc"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_ride_id(""), Err(AppError::NotFound(_))));
    }
}
