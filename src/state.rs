use std::sync::Arc;

use crate::notifier::Notifier;
use crate::rate_limit::RateLimiter;

// app's shared state
pub struct AppState {
    pub limiter: Arc<dyn RateLimiter>,
    pub notifier: Arc<dyn Notifier>,
}
