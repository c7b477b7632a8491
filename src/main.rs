mod config;
mod fmt;
mod handlers;
mod metrics;
mod models;
mod notifier;
mod rate_limit;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use config::{Args, TelegramConfig};
use handlers::{health_handler, method_not_allowed_handler, metrics_handler, send_location_handler};
use notifier::TelegramNotifier;
use rate_limit::FixedWindowLimiter;
use state::AppState;

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/send-location",
            post(send_location_handler).fallback(method_not_allowed_handler),
        )
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // parse cli arguments, credentials come from the environment
    let args = Args::parse();
    let telegram = TelegramConfig::from_env();

    let state = Arc::new(AppState {
        limiter: Arc::new(FixedWindowLimiter::new(
            args.rate_limit,
            Duration::from_secs(args.rate_window),
        )),
        notifier: Arc::new(TelegramNotifier::new(
            telegram.bot_token,
            telegram.chat_id,
            Duration::from_secs(args.request_timeout),
            args.retry_attempts,
        )),
    });

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("Location relay running on http://localhost:{}", args.port);
    println!(
        "Rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );
    println!(
        "Telegram delivery: up to {} attempts, {}s timeout each",
        args.retry_attempts, args.request_timeout
    );

    // connect info feeds the fallback rate limit key when no proxy header is set
    axum::serve(
        listener,
        app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
