//! Typed backend contracts
//!
//! One shape per endpoint the views use. Unknown enum values from the
//! backend deserialize to `Unknown` instead of failing the whole payload.

pub mod account;
pub mod card;
pub mod customer;
pub mod page;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountStatus, AccountType, NewAccount};
pub use card::{Card, CardStatus, CardType, NewCard};
pub use customer::{Customer, NewCustomer};
pub use page::Page;
pub use transaction::{NewTransaction, Transaction, TransactionType, TransferRequest};
pub use user::{LoginRequest, LoginResponse, NewUser, RoleChange, UserProfile, UserStatus};
