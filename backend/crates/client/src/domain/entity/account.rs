//! Account contracts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Current,
    Savings,
    FixedDeposit,
    Loan,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Inactive,
    Blocked,
    Closed,
    #[serde(other)]
    Unknown,
}

/// GET /accounts/{id}, /accounts/customer/{id}, /accounts/card/{number}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub account_number: Option<String>,
    pub balance: f64,
    #[serde(default, rename = "type")]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub status: Option<AccountStatus>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == Some(AccountStatus::Active)
    }
}

/// POST /accounts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub customer_id: i64,
    pub initial_balance: f64,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl NewAccount {
    /// New accounts always open empty
    pub fn empty(customer_id: i64, account_type: AccountType) -> Self {
        Self {
            customer_id,
            initial_balance: 0.0,
            account_type,
        }
    }
}
