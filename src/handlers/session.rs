use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::db::queries::user as user_queries;
use crate::error::AppResult;
use crate::handlers::render;
use crate::middleware::auth::SESSION_COOKIE;
use crate::utils::jwt::create_token;
use crate::utils::validation::validate_email;
use crate::views::SignInTemplate;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignInForm {
    #[serde(default)]
    pub email: String,
}

pub async fn sign_in_form() -> AppResult<Response> {
    let page = SignInTemplate {
        email: String::new(),
        error: None,
    };
    Ok(render(page)?.into_response())
}

/// Issue a session token for an existing user and keep it in a cookie, so
/// the booking form can be submitted from the browser.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> AppResult<Response> {
    let email = form.email.trim();

    if let Err(message) = validate_email(email) {
        let page = SignInTemplate {
            email: form.email.clone(),
            error: Some(message),
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, render(page)?).into_response());
    }

    let Some(user) = user_queries::find_user_by_email(&state.db, email).await? else {
        tracing::debug!(email, "Sign-in for unknown email");
        let page = SignInTemplate {
            email: form.email.clone(),
            error: Some("No rider account uses that email address.".to_string()),
        };
        return Ok((StatusCode::UNAUTHORIZED, render(page)?).into_response());
    };

    let token = create_token(
        user.id,
        &user.email,
        &user.role,
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;
    tracing::info!(user_id = user.id, "User signed in");

    let jar = jar.add(
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    );
    Ok((jar, Redirect::to("/RideList")).into_response())
}

pub async fn sign_out(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    (jar, Redirect::to("/"))
}
