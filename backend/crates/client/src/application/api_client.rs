//! Client Request Wrapper
//!
//! Every view talks to the backend through [`ApiClient`]. One call runs
//! `Idle -> Sending -> Success | Unauthorized | Failed`:
//!
//! 1. The bearer token is read from the session and attached, except on
//!    the login and registration paths.
//! 2. The descriptor is POSTed to the relay.
//! 3. The reply body is parsed as JSON. A body that does not parse fails the
//!    call with `InvalidResponse`.
//! 4. 2xx returns the parsed value. 401 clears the session and redirects
//!    to the login screen. Anything else fails with the backend's `message`.
//!
//! Calls are never retried.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::paths::is_unauthenticated;
use kernel::{CallDescriptor, CallMethod};
use platform::headers::{bearer, redact};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::application::config::ClientConfig;
use crate::application::optional::OptionalFetch;
use crate::domain::navigator::Navigator;
use crate::domain::session::SessionContext;
use crate::domain::transport::{RelayReply, RelayTransport};
use crate::error::{ClientError, ClientResult, FALLBACK_MESSAGE};

/// One call to be made through the relay
#[derive(Debug, Clone)]
pub struct Call {
    method: CallMethod,
    path: String,
    body: Option<Value>,
    headers: BTreeMap<String, String>,
    cancel: Option<CancellationToken>,
}

impl Call {
    pub fn new(method: CallMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: BTreeMap::new(),
            cancel: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(CallMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(CallMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(CallMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(CallMethod::Delete, path)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize a typed request body
    pub fn body<B: Serialize + ?Sized>(self, body: &B) -> ClientResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::InvalidInput(format!("Request body not serializable: {e}")))?;
        Ok(self.json(value))
    }

    /// Extra header; a caller-supplied Authorization wins over the session token
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn cancel_with(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn method(&self) -> CallMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// The request wrapper
pub struct ApiClient<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    transport: Arc<T>,
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    config: Arc<ClientConfig>,
}

impl<T> Clone for ApiClient<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            session: self.session.clone(),
            navigator: self.navigator.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T> ApiClient<T>
where
    T: RelayTransport + Send + Sync + 'static,
{
    pub fn new(
        transport: Arc<T>,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
        config: ClientConfig,
    ) -> Self {
        Self {
            transport,
            session,
            navigator,
            config: Arc::new(config),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run one call and return the parsed reply
    pub async fn send(&self, call: Call) -> ClientResult<Value> {
        let Call {
            method,
            path,
            body,
            headers,
            cancel,
        } = call;

        let mut descriptor = CallDescriptor::new(method, path);
        descriptor.headers = headers;
        descriptor.body = body;
        self.attach_token(&mut descriptor)?;

        tracing::debug!(
            path = %descriptor.url,
            method = %descriptor.method,
            has_auth_header = descriptor.has_authorization(),
            "API call"
        );

        let reply = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!(path = %descriptor.url, "API call cancelled");
                        return Err(ClientError::Cancelled);
                    }
                    reply = self.transport.send(&descriptor) => reply?,
                }
            }
            None => self.transport.send(&descriptor).await?,
        };

        self.interpret(&descriptor.url, reply)
    }

    /// Run one call and decode the reply into `R`
    pub async fn send_as<R: DeserializeOwned>(&self, call: Call) -> ClientResult<R> {
        let value = self.send(call).await?;
        serde_json::from_value(value).map_err(ClientError::Contract)
    }

    pub async fn get(&self, path: &str) -> ClientResult<Value> {
        self.send(Call::get(path)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        self.send(Call::post(path).body(body)?).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        self.send(Call::put(path).body(body)?).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Value> {
        self.send(Call::delete(path)).await
    }

    pub async fn get_as<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        self.send_as(Call::get(path)).await
    }

    pub async fn post_as<B, R>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send_as(Call::post(path).body(body)?).await
    }

    /// GET whose failure leaves the view intact
    pub async fn optional_get<R: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ClientResult<OptionalFetch<R>> {
        OptionalFetch::from_result(self.get_as(path).await)
    }

    fn attach_token(&self, descriptor: &mut CallDescriptor) -> ClientResult<()> {
        if !self.session.is_attached()
            || is_unauthenticated(&descriptor.url)
            || descriptor.has_authorization()
        {
            return Ok(());
        }

        match self.session.token()? {
            Some(token) => {
                tracing::debug!(token_prefix = %redact(&token), "Attaching bearer token");
                descriptor
                    .headers
                    .insert("Authorization".to_string(), bearer(&token));
            }
            None => {
                tracing::warn!(path = %descriptor.url, "No token in session storage");
            }
        }
        Ok(())
    }

    fn interpret(&self, path: &str, reply: RelayReply) -> ClientResult<Value> {
        // Body is irrelevant once the session is rejected
        if reply.status == 401 && self.session.is_attached() {
            tracing::warn!(path, "Session rejected, redirecting to login");
            if let Err(e) = self.session.clear() {
                tracing::error!(error = %e, "Failed to clear session");
            }
            self.navigator.navigate(&self.config.login_redirect);
            return Err(ClientError::Unauthorized);
        }

        let value = if reply.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&reply.body).map_err(|e| {
                tracing::warn!(
                    path,
                    status = reply.status,
                    error = %e,
                    body_prefix = %reply.body.chars().take(100).collect::<String>(),
                    "Relay reply is not JSON"
                );
                ClientError::InvalidResponse
            })?
        };

        if reply.is_success() {
            return Ok(value);
        }

        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string();

        Err(ClientError::Backend {
            status: reply.status,
            message,
        })
    }
}
