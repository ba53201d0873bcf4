//! Client Request Wrapper
//!
//! What every view calls instead of the backend. A call goes
//! View -> [`ApiClient`] -> relay -> backend and back.
//!
//! ## Layers
//!
//! - `domain`: session context, storage/navigator/transport traits and the
//!   typed backend contracts
//! - `application`: the wrapper itself, best-effort fetches, cancellation
//!   and per-area services
//! - `infra`: storage backends, the reqwest relay transport and a
//!   recording navigator
//!
//! ## Usage
//!
//! ```rust,ignore
//! let storage = Arc::new(JsonFileStorage::new("session.json"));
//! let api = ApiClient::new(
//!     Arc::new(HttpRelayTransport::connect(&config.relay_url)?),
//!     SessionContext::browser(storage),
//!     Arc::new(HistoryNavigator::new()),
//!     config,
//! );
//! api.auth().login("anna", "secret").await?;
//! let accounts = api.accounts().for_customer(12).await?;
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

pub use application::services::{
    AccountOverview, AccountsService, AdminUsersService, AuthService, CardsService,
    CustomersService, Registration, RegistrationOutcome, TransactionsService,
};
pub use application::{ApiClient, Call, CallGuard, ClientConfig, OptionalFetch, fan_out};
pub use domain::navigator::Navigator;
pub use domain::session::{Session, SessionContext};
pub use domain::storage::KeyValueStorage;
pub use domain::transport::{RelayReply, RelayTransport};
pub use error::{ClientError, ClientResult, FALLBACK_MESSAGE};
pub use infra::file::JsonFileStorage;
pub use infra::http::HttpRelayTransport;
pub use infra::memory::MemoryStorage;
pub use infra::navigator::HistoryNavigator;

#[cfg(test)]
mod tests;
