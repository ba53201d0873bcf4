//! Transaction contracts

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    TransferIn,
    TransferOut,
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    /// Money leaving the account
    pub fn is_debit(self) -> bool {
        matches!(self, TransactionType::Withdrawal | TransactionType::TransferOut)
    }
}

/// GET /transactions/account/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub target_account_id: Option<i64>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Transaction {
    /// Backend timestamps come with or without an offset; offset-less ones are UTC
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// POST /transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub account_id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
}

/// POST /transactions/transfer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub source_account_id: i64,
    pub target_account_id: i64,
    pub amount: f64,
    pub description: String,
}
