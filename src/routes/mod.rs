use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{booking, feedback, home, rides, session};
use crate::middleware::auth::auth_middleware;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Booking needs to know who the rider is
    let booking_routes = Router::new()
        .route("/BookConfirmed/{id}", post(booking::book_confirmed))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/", get(home::index))
        .route("/Privacy", get(home::privacy))
        // Rides
        .route("/RideList", get(rides::list_rides))
        .route("/Create", get(rides::create_form).post(rides::create_ride))
        .route("/Details/{id}", get(rides::details))
        .route("/Edit/{id}", get(rides::edit_form).post(rides::update_ride))
        .route("/Delete/{id}", get(rides::delete_form).post(rides::delete_ride))
        // Booking
        .route("/Book/{id}", get(booking::book_form))
        .merge(booking_routes)
        // Session
        .route("/SignIn", get(session::sign_in_form).post(session::sign_in))
        .route("/SignOut", post(session::sign_out))
        // Feedback
        .route("/Feedback", get(feedback::feedback_form).post(feedback::submit_feedback))
        .fallback(home::not_found)
        .with_state(state)
}
