pub mod configuration;
pub mod errors;
pub mod notifier;
pub mod telemetry;
pub mod tls;
pub mod traits;
