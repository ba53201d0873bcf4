//! Per-area services
//!
//! Thin typed wrappers over [`ApiClient`](crate::ApiClient): one method per
//! backend endpoint a view uses. Obtain them from the client, e.g.
//! `api.accounts().for_customer(12)`.

pub mod accounts;
pub mod admin;
pub mod auth;
pub mod cards;
pub mod customers;
pub mod transactions;

pub use accounts::{AccountOverview, AccountsService};
pub use admin::AdminUsersService;
pub use auth::{AuthService, Registration, RegistrationOutcome};
pub use cards::CardsService;
pub use customers::CustomersService;
pub use transactions::TransactionsService;

use crate::application::api_client::ApiClient;
use crate::domain::transport::RelayTransport;

impl<T> ApiClient<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    pub fn auth(&self) -> AuthService<T> {
        AuthService::new(self.clone())
    }

    pub fn accounts(&self) -> AccountsService<T> {
        AccountsService::new(self.clone())
    }

    pub fn transactions(&self) -> TransactionsService<T> {
        TransactionsService::new(self.clone())
    }

    pub fn cards(&self) -> CardsService<T> {
        CardsService::new(self.clone())
    }

    pub fn customers(&self) -> CustomersService<T> {
        CustomersService::new(self.clone())
    }

    pub fn admin_users(&self) -> AdminUsersService<T> {
        AdminUsersService::new(self.clone())
    }
}
