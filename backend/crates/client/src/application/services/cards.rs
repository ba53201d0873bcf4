//! Cards

use crate::application::api_client::ApiClient;
use crate::domain::entity::{Card, NewCard};
use crate::domain::transport::RelayTransport;
use crate::error::ClientResult;

pub struct CardsService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    api: ApiClient<T>,
}

impl<T> CardsService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn for_account(&self, account_id: i64) -> ClientResult<Vec<Card>> {
        self.api.get_as(&format!("/cards/account/{account_id}")).await
    }

    pub async fn for_customer(&self, customer_id: i64) -> ClientResult<Vec<Card>> {
        self.api
            .get_as(&format!("/cards/customer/{customer_id}"))
            .await
    }

    pub async fn issue(&self, card: &NewCard) -> ClientResult<Card> {
        self.api.post_as("/cards", card).await
    }
}
