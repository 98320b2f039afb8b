//! Askama page templates.
//!
//! Templates receive plain display values. Anything optional in the domain
//! (a dangling driver, a missing notice) is resolved here before rendering.

use askama::Template;
use axum::response::Redirect;

use crate::db::queries::ride::{RideInput, RideWithDriver};

/// One-shot message shown on the ride list after a redirect.
///
/// Carried explicitly in the redirect URL as `?notice=<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Booked,
    NoSeats,
    BookingFailed,
    Deleted,
    DeleteFailed,
}

impl Notice {
    pub fn key(&self) -> &'static str {
        match self {
            Notice::Booked => "booked",
            Notice::NoSeats => "no_seats",
            Notice::BookingFailed => "booking_failed",
            Notice::Deleted => "deleted",
            Notice::DeleteFailed => "delete_failed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "booked" => Some(Notice::Booked),
            "no_seats" => Some(Notice::NoSeats),
            "booking_failed" => Some(Notice::BookingFailed),
            "deleted" => Some(Notice::Deleted),
            "delete_failed" => Some(Notice::DeleteFailed),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::Booked => "Ride booked successfully!",
            Notice::NoSeats => "No seats available for this ride.",
            Notice::BookingFailed => "Unable to book ride. Please try again.",
            Notice::Deleted => "Ride deleted successfully!",
            Notice::DeleteFailed => "Unable to delete ride. Please try again.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::NoSeats | Notice::BookingFailed | Notice::DeleteFailed
        )
    }

    /// Redirect to the ride list carrying this notice
    pub fn redirect(&self) -> Redirect {
        Redirect::to(&format!("/RideList?notice={}", self.key()))
    }
}

/// A rendered notice banner
#[derive(Debug, Clone)]
pub struct NoticeView {
    pub message: String,
    pub css_class: &'static str,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            message: notice.message().to_string(),
            css_class: if notice.is_error() { "notice error" } else { "notice success" },
        }
    }
}

/// Display values for a single ride
#[derive(Debug, Clone)]
pub struct RideRow {
    pub id: i32,
    pub start_location: String,
    pub end_location: String,
    pub driver_name: String,
    pub available_seats: i32,
    pub price: String,
    pub bookable: bool,
}

impl From<RideWithDriver> for RideRow {
    fn from((ride, driver): RideWithDriver) -> Self {
        Self {
            id: ride.id,
            bookable: ride.is_bookable(),
            start_location: ride.start_location,
            end_location: ride.end_location,
            driver_name: driver
                .map(|d| d.name)
                .unwrap_or_else(|| format!("Driver #{}", ride.driver_id)),
            available_seats: ride.available_seats,
            price: format!("{:.2}", ride.price),
        }
    }
}

/// Raw form values echoed back into the ride form
#[derive(Debug, Clone, Default)]
pub struct RideFormValues {
    pub start_location: String,
    pub end_location: String,
    pub driver_id: String,
    pub available_seats: String,
    pub price: String,
}

impl From<&RideInput> for RideFormValues {
    fn from(input: &RideInput) -> Self {
        Self {
            start_location: input.start_location.clone(),
            end_location: input.end_location.clone(),
            driver_id: input.driver_id.to_string(),
            available_seats: input.available_seats.to_string(),
            price: input.price.to_string(),
        }
    }
}

impl From<&crate::entities::ride::Model> for RideFormValues {
    fn from(ride: &crate::entities::ride::Model) -> Self {
        Self {
            start_location: ride.start_location.clone(),
            end_location: ride.end_location.clone(),
            driver_id: ride.driver_id.to_string(),
            available_seats: ride.available_seats.to_string(),
            price: ride.price.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate;

#[derive(Template)]
#[template(path = "ride_list.html")]
pub struct RideListTemplate {
    pub rides: Vec<RideRow>,
    pub notice: Option<NoticeView>,
    pub load_error: Option<String>,
}

/// Shared by the create and edit pages
#[derive(Template)]
#[template(path = "ride_form.html")]
pub struct RideFormTemplate {
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub values: RideFormValues,
    pub error: Option<String>,
}

impl RideFormTemplate {
    pub fn create(values: RideFormValues, error: Option<String>) -> Self {
        Self {
            heading: "Offer a ride".to_string(),
            action: "/Create".to_string(),
            submit_label: "Create".to_string(),
            values,
            error,
        }
    }

    pub fn edit(ride_id: i32, values: RideFormValues, error: Option<String>) -> Self {
        Self {
            heading: "Edit ride".to_string(),
            action: format!("/Edit/{}", ride_id),
            submit_label: "Save".to_string(),
            values,
            error,
        }
    }
}

#[derive(Template)]
#[template(path = "ride_details.html")]
pub struct RideDetailsTemplate {
    pub ride: RideRow,
}

#[derive(Template)]
#[template(path = "book.html")]
pub struct BookTemplate {
    pub ride: RideRow,
}

#[derive(Template)]
#[template(path = "delete.html")]
pub struct DeleteTemplate {
    pub ride: RideRow,
}

#[derive(Template)]
#[template(path = "feedback.html")]
pub struct FeedbackTemplate {
    pub customer_name: String,
    pub comments: String,
    pub customer_name_error: Option<String>,
    pub comments_error: Option<String>,
    pub error: Option<String>,
}

impl FeedbackTemplate {
    pub fn empty() -> Self {
        Self {
            customer_name: String::new(),
            comments: String::new(),
            customer_name_error: None,
            comments_error: None,
            error: None,
        }
    }
}

#[derive(Template)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate {
    pub email: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub message: String,
}
