use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::error::{AppError, AppResult};
use crate::utils::jwt::verify_token;
use crate::AppState;

/// Cookie holding the token issued at sign-in
pub const SESSION_COOKIE: &str = "ride_session";

/// Verify the caller's token and expose its claims to the handler.
///
/// API clients send `Authorization: Bearer`; browsers carry the token in
/// the session cookie set by `/SignIn`. The header wins when both are present.
pub async fn auth_middleware(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = auth
        .map(|TypedHeader(auth)| auth.token().to_string())
        .or_else(|| jar.get(SESSION_COOKIE).map(|c| c.value().to_string()))
        .ok_or_else(|| AppError::Unauthorized("Please sign in to book a ride.".to_string()))?;

    let claims = verify_token(&token, &state.config.jwt_secret)?;
    tracing::debug!(user_id = claims.sub, role = %claims.role, "Authenticated request");

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
