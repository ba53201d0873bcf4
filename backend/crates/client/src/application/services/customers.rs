//! Customers

use crate::application::api_client::ApiClient;
use crate::domain::entity::{Customer, NewCustomer};
use crate::domain::transport::RelayTransport;
use crate::error::ClientResult;

pub struct CustomersService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    api: ApiClient<T>,
}

impl<T> CustomersService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn find_by_email(&self, email: &str) -> ClientResult<Customer> {
        self.api
            .get_as(&format!("/customers/find/{}", urlencoding::encode(email.trim())))
            .await
    }

    pub async fn create(&self, customer: &NewCustomer) -> ClientResult<Customer> {
        self.api.post_as("/customers/create", customer).await
    }
}
