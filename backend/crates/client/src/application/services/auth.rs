//! Login, registration and logout

use kernel::paths::{LOGIN_PATH, PROFILE_PATH, REGISTRATION_PATH};
use serde_json::{Value, json};

use crate::application::api_client::ApiClient;
use crate::application::optional::OptionalFetch;
use crate::domain::entity::{
    Customer, LoginRequest, LoginResponse, NewCustomer, NewUser, UserProfile,
};
use crate::domain::session::Session;
use crate::domain::transport::RelayTransport;
use crate::error::{ClientError, ClientResult};

const PASSWORD_VERIFY_PATH: &str = "/passwords/verify";
const CUSTOMER_CREATE_PATH: &str = "/customers/create";

/// Sign-up form as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl Registration {
    /// Profile kept in the session when the backend profile is unavailable
    fn fallback_profile(&self, customer: Option<&Customer>) -> UserProfile {
        UserProfile {
            id: None,
            username: self.username.clone(),
            email: Some(self.email.clone()),
            firstname: Some(self.firstname.clone()),
            lastname: Some(self.lastname.clone()),
            date_of_birth: Some(self.date_of_birth.clone()),
            customer_id: customer.map(|c| c.id),
            roles: Vec::new(),
            status: None,
        }
    }
}

#[derive(Debug)]
pub struct RegistrationOutcome {
    /// Backend reply to the user creation
    pub user: Value,
    /// The linked customer record; registration succeeds without it
    pub customer: OptionalFetch<Customer>,
    /// Signed-in session for the new user
    pub session: Session,
}

pub struct AuthService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    api: ApiClient<T>,
}

impl<T> AuthService<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// Exchange credentials for a token, then load the profile
    ///
    /// The session is usable as soon as the token is stored; a failed
    /// profile fetch leaves `user` empty.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Session> {
        let token = self.sign_in(username, password).await?;

        let user = self.load_profile().await?;
        if let Some(user) = &user {
            self.api.session().store_user(user)?;
        }

        tracing::info!(username, has_profile = user.is_some(), "Signed in");
        Ok(Session {
            token: Some(token),
            user,
        })
    }

    /// Create the user and sign in as it
    ///
    /// The customer record is created with the new token on a best-effort
    /// basis. The stored user is the backend profile, or one built from the
    /// form when the profile cannot be loaded.
    pub async fn register(&self, form: &Registration) -> ClientResult<RegistrationOutcome> {
        let new_user = NewUser {
            firstname: form.firstname.clone(),
            lastname: form.lastname.clone(),
            date_of_birth: form.date_of_birth.clone(),
            email: form.email.clone(),
            username: form.username.clone(),
            password: form.password.clone(),
            active: true,
            enabled: true,
            roles: vec!["USER".to_string()],
        };
        let created = self.api.post(REGISTRATION_PATH, &new_user).await?;

        let token = self.sign_in(&form.username, &form.password).await?;

        let new_customer = NewCustomer {
            firstname: form.firstname.clone(),
            lastname: form.lastname.clone(),
            email: form.email.clone(),
            date_of_birth: form.date_of_birth.clone(),
        };
        let customer: OptionalFetch<Customer> = OptionalFetch::from_result(
            self.api.post_as(CUSTOMER_CREATE_PATH, &new_customer).await,
        )?;

        let user = match self.load_profile().await? {
            Some(user) => user,
            None => form.fallback_profile(customer.get()),
        };
        self.api.session().store_user(&user)?;

        tracing::info!(
            username = %form.username,
            has_customer = customer.is_present(),
            "Registered"
        );
        Ok(RegistrationOutcome {
            user: created,
            customer,
            session: Session {
                token: Some(token),
                user: Some(user),
            },
        })
    }

    pub fn logout(&self) -> ClientResult<()> {
        self.api.session().clear()?;
        self.api.navigator().navigate(&self.api.config().login_path);
        Ok(())
    }

    pub async fn verify_password(&self, password: &str) -> ClientResult<Value> {
        self.api
            .post(PASSWORD_VERIFY_PATH, &json!({ "password": password }))
            .await
    }

    async fn sign_in(&self, username: &str, password: &str) -> ClientResult<String> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.api.post_as(LOGIN_PATH, &request).await?;
        let token = response
            .jwt
            .filter(|jwt| !jwt.is_empty())
            .ok_or(ClientError::MissingToken)?;
        self.api.session().store_token(&token)?;
        Ok(token)
    }

    async fn load_profile(&self) -> ClientResult<Option<UserProfile>> {
        let profile = self.api.get_as::<UserProfile>(PROFILE_PATH).await;
        Ok(OptionalFetch::from_result(profile)?.present())
    }
}
