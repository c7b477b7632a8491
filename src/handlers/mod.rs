mod health;
mod location;
mod metrics;

pub use health::health_handler;
pub use location::{method_not_allowed_handler, send_location_handler};
pub use metrics::metrics_handler;
