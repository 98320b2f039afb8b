//! Per-client throttling and the access log line written for every request.

use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use governor::{clock::QuantaInstant, middleware::NoOpMiddleware};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor, GovernorLayer,
};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Throttling keyed on the peer address; the router must be served with
/// connect info.
pub type ClientGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, Body>;

pub fn create_client_governor(config: &Config) -> AppResult<ClientGovernorLayer> {
    let governor = GovernorConfigBuilder::default()
        .per_millisecond(replenish_interval_ms(config.rate_limit_per_minute))
        .burst_size(config.rate_limit_burst.max(1))
        .finish()
        .ok_or_else(|| AppError::Internal("Invalid rate limit settings".to_string()))?;

    tracing::debug!(
        per_minute = config.rate_limit_per_minute,
        burst = config.rate_limit_burst,
        "Client rate limiting enabled"
    );

    Ok(GovernorLayer::new(Arc::new(governor)))
}

/// Milliseconds between two replenished tokens
fn replenish_interval_ms(per_minute: u32) -> u64 {
    (60_000 / u64::from(per_minute.max(1))).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Throttled,
    ServerError,
    Rejected,
    Served,
}

impl Disposition {
    fn of(status: StatusCode) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            Disposition::Throttled
        } else if status.is_server_error() {
            Disposition::ServerError
        } else if status.is_client_error() {
            Disposition::Rejected
        } else {
            Disposition::Served
        }
    }
}

/// One access log line per request, levelled by how the request ended.
/// Booking and ride pages report a 404 for unknown rides, so client errors
/// stay at info.
pub async fn log_request(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let client = peer.ip();

    match Disposition::of(response.status()) {
        Disposition::Throttled => {
            tracing::warn!(%client, %method, %path, "Client throttled")
        }
        Disposition::ServerError => {
            tracing::warn!(%client, %method, %path, status, elapsed_ms, "Request failed")
        }
        Disposition::Rejected => {
            tracing::info!(%client, %method, %path, status, elapsed_ms, "Request rejected")
        }
        Disposition::Served => {
            tracing::debug!(%client, %method, %path, status, elapsed_ms, "Request served")
        }
    }

    response
}
