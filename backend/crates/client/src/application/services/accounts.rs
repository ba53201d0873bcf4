//! Accounts

use crate::application::api_client::ApiClient;
use crate::application::optional::OptionalFetch;
use crate::domain::entity::{Account, AccountType, Card, NewAccount, Transaction};
use crate::domain::transport::RelayTransport;
use crate::error::{ClientError, ClientResult};

/// Account detail view: the account itself plus what is shown next to it
#[derive(Debug)]
pub struct AccountOverview {
    pub account: Account,
    pub transactions: OptionalFetch<Vec<Transaction>>,
    pub cards: OptionalFetch<Vec<Card>>,
}

pub struct AccountsService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    api: ApiClient<T>,
}

impl<T> AccountsService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn for_customer(&self, customer_id: i64) -> ClientResult<Vec<Account>> {
        self.api
            .get_as(&format!("/accounts/customer/{customer_id}"))
            .await
    }

    pub async fn get(&self, account_id: i64) -> ClientResult<Account> {
        self.api.get_as(&format!("/accounts/{account_id}")).await
    }

    /// Look an account up by card number; spaces and dashes are ignored
    pub async fn by_card(&self, card_number: &str) -> ClientResult<Account> {
        let digits: String = card_number.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(ClientError::InvalidInput(
                "Card number must contain digits".to_string(),
            ));
        }
        self.api.get_as(&format!("/accounts/card/{digits}")).await
    }

    /// Open an empty account
    pub async fn create(&self, customer_id: i64, account_type: AccountType) -> ClientResult<Account> {
        self.api
            .post_as("/accounts", &NewAccount::empty(customer_id, account_type))
            .await
    }

    /// The account, then its transactions and cards side by side
    pub async fn overview(&self, account_id: i64) -> ClientResult<AccountOverview> {
        let account = self.get(account_id).await?;

        let transactions_path = format!("/transactions/account/{account_id}");
        let cards_path = format!("/cards/account/{account_id}");
        let (transactions, cards) = tokio::join!(
            self.api.optional_get::<Vec<Transaction>>(&transactions_path),
            self.api.optional_get::<Vec<Card>>(&cards_path),
        );

        Ok(AccountOverview {
            account,
            transactions: transactions?,
            cards: cards?,
        })
    }
}
