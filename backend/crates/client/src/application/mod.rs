pub mod api_client;
pub mod cancel;
pub mod config;
pub mod optional;
pub mod services;

pub use api_client::{ApiClient, Call};
pub use cancel::CallGuard;
pub use config::ClientConfig;
pub use optional::{OptionalFetch, fan_out};
