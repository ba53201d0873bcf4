//! Transactions, deposits and transfers

use serde_json::Value;

use crate::application::api_client::ApiClient;
use crate::application::optional::fan_out;
use crate::application::services::accounts::AccountsService;
use crate::domain::entity::{NewTransaction, Transaction, TransactionType, TransferRequest};
use crate::domain::transport::RelayTransport;
use crate::error::{ClientError, ClientResult};

pub struct TransactionsService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    api: ApiClient<T>,
}

impl<T> TransactionsService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn for_account(&self, account_id: i64) -> ClientResult<Vec<Transaction>> {
        self.api
            .get_as(&format!("/transactions/account/{account_id}"))
            .await
    }

    /// Every transaction of every account of the customer, newest first
    ///
    /// Accounts whose history cannot be loaded contribute nothing.
    pub async fn history_for_customer(&self, customer_id: i64) -> ClientResult<Vec<Transaction>> {
        let accounts = AccountsService::new(self.api.clone())
            .for_customer(customer_id)
            .await?;

        let per_account = fan_out(accounts.iter().map(|account| self.for_account(account.id))).await?;

        let mut history: Vec<Transaction> = per_account.into_iter().flatten().collect();
        history.sort_by(|a, b| b.occurred_at().cmp(&a.occurred_at()));
        Ok(history)
    }

    pub async fn create(&self, transaction: &NewTransaction) -> ClientResult<Transaction> {
        validate_amount(transaction.amount)?;
        self.api.post_as("/transactions", transaction).await
    }

    pub async fn deposit(
        &self,
        account_id: i64,
        amount: f64,
        description: &str,
    ) -> ClientResult<Transaction> {
        self.record(account_id, amount, TransactionType::Deposit, description)
            .await
    }

    /// Move money between two accounts of this bank
    pub async fn transfer(
        &self,
        source_account_id: i64,
        target_account_id: i64,
        amount: f64,
        description: &str,
    ) -> ClientResult<Value> {
        validate_amount(amount)?;
        if source_account_id == target_account_id {
            return Err(ClientError::InvalidInput(
                "Source and target accounts must differ".to_string(),
            ));
        }
        let request = TransferRequest {
            source_account_id,
            target_account_id,
            amount,
            description: description.to_string(),
        };
        self.api.post("/transactions/transfer", &request).await
    }

    /// Money sent to another bank
    pub async fn transfer_external(
        &self,
        account_id: i64,
        amount: f64,
        description: &str,
    ) -> ClientResult<Transaction> {
        self.record(account_id, amount, TransactionType::TransferOut, description)
            .await
    }

    /// Money received from another bank
    pub async fn deposit_external(
        &self,
        account_id: i64,
        amount: f64,
        description: &str,
    ) -> ClientResult<Transaction> {
        self.record(account_id, amount, TransactionType::TransferIn, description)
            .await
    }

    async fn record(
        &self,
        account_id: i64,
        amount: f64,
        transaction_type: TransactionType,
        description: &str,
    ) -> ClientResult<Transaction> {
        self.create(&NewTransaction {
            account_id,
            amount,
            transaction_type,
            description: description.to_string(),
        })
        .await
    }
}

fn validate_amount(amount: f64) -> ClientResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ClientError::InvalidInput(
            "Amount must be a positive number".to_string(),
        ))
    }
}
