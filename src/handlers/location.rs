use axum::{
    Json,
    extract::{ConnectInfo, FromRequestParts, State},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::fmt::{format_duration, format_timestamp, maps_link, now_timestamp};
use crate::metrics::{DELIVERY_FAILURES, RATE_LIMITED, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{
    LocationRequest, RateLimitedResponse, RelayFailure, RelaySuccess, RequestError,
};
use crate::rate_limit::Decision;
use crate::state::AppState;

// Rate limit key: proxy header first, then the socket address.
// The header is not authenticated, so the throttle is spoofable.
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(forwarded) = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
        {
            if let Some(ip) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty()) {
                return Ok(ClientIp(ip.to_string()));
            }
        }

        let ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        Ok(ClientIp(ip))
    }
}

// post handler
pub async fn send_location_handler(
    State(state): State<Arc<AppState>>,
    ClientIp(client): ClientIp,
    Json(payload): Json<LocationRequest>,
) -> Response {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    let (remaining, reset_in) = match state.limiter.check(&client, Instant::now()) {
        Decision::Limited { retry_after } => {
            RATE_LIMITED.inc();
            return (
                StatusCode::TOO_MANY_REQUESTS,
                Json(RateLimitedResponse {
                    error: "Too many requests",
                    timestamp: now_timestamp(),
                    formatted_retry_after: format_duration(retry_after),
                    retry_after_ms: retry_after.as_millis() as u64,
                }),
            )
                .into_response();
        }
        Decision::Allowed {
            remaining,
            reset_in,
        } => (remaining, reset_in),
    };

    // Zero is a valid coordinate, only absence or non-finite values are rejected
    let (lat, lon) = match (payload.lat, payload.lon) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => (lat, lon),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(RequestError {
                    error: "Missing latitude or longitude",
                    timestamp: now_timestamp(),
                }),
            )
                .into_response();
        }
    };

    let link = maps_link(lat, lon);
    let timestamp = format_timestamp(Utc::now());
    let text = format!(
        "📍 New Location!\n{}\nLat: {}\nLon: {}\nTime: {}",
        link, lat, lon, timestamp
    );

    let result = state.notifier.send(&text).await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(RelaySuccess {
                success: true,
                timestamp: timestamp.clone(),
                formatted_timestamp: timestamp,
                requests_remaining: remaining,
                rate_limit_reset: format_duration(reset_in),
            }),
        )
            .into_response(),
        Err(e) => {
            DELIVERY_FAILURES.inc();
            println!("[Relay] delivery failed for {}: {}", client, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayFailure {
                    error: "Failed to send location",
                    timestamp: now_timestamp(),
                    details: e.to_string(),
                    formatted_error_time: now_timestamp(),
                }),
            )
                .into_response()
        }
    }
}

// JSON 405 for anything that isn't a POST on the relay route.
// Mounted as the method fallback, so non-POST traffic never touches the
// rate limiter and does not consume quota.
pub async fn method_not_allowed_handler() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(RequestError {
            error: "Method not allowed",
            timestamp: now_timestamp(),
        }),
    )
        .into_response()
}
