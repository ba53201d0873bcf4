//! User administration
//!
//! The backend enforces who may call these; the client only hides the
//! screens from non-admins via `SessionContext::is_admin`.

use serde_json::Value;

use crate::application::api_client::ApiClient;
use crate::domain::entity::{Page, RoleChange, UserProfile};
use crate::domain::transport::RelayTransport;
use crate::error::ClientResult;

pub struct AdminUsersService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    api: ApiClient<T>,
}

impl<T> AdminUsersService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn list(&self, page: u32, size: u32) -> ClientResult<Page<UserProfile>> {
        self.api
            .get_as(&format!("/users/all?page={page}&size={size}"))
            .await
    }

    pub async fn search(&self, query: &str, page: u32, size: u32) -> ClientResult<Page<UserProfile>> {
        self.api
            .get_as(&format!(
                "/users/search?query={}&page={page}&size={size}",
                urlencoding::encode(query)
            ))
            .await
    }

    /// Ban an active user or reinstate a banned one
    pub async fn toggle_status(&self, user_id: i64) -> ClientResult<UserProfile> {
        self.api.get_as(&format!("/users/status/{user_id}")).await
    }

    pub async fn add_role(&self, username: &str, role_name: &str) -> ClientResult<Value> {
        self.api
            .post("/users/roles/add", &role_change(username, role_name))
            .await
    }

    pub async fn remove_role(&self, username: &str, role_name: &str) -> ClientResult<Value> {
        self.api
            .post("/users/roles/remove", &role_change(username, role_name))
            .await
    }

    pub async fn delete(&self, user_id: i64) -> ClientResult<Value> {
        self.api.delete(&format!("/users/delete/{user_id}")).await
    }
}

fn role_change(username: &str, role_name: &str) -> RoleChange {
    RoleChange {
        username: username.to_string(),
        role_name: role_name.to_string(),
    }
}
