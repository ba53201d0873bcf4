//! Best-effort fetches
//!
//! Some views load secondary data (transactions next to an account, the
//! customer record after registration) and render without it on failure.

use std::future::Future;

use futures_util::future::join_all;

use crate::error::{ClientError, ClientResult};

/// Outcome of a call whose failure must not fail the view
#[derive(Debug)]
pub enum OptionalFetch<T> {
    Present(T),
    /// The backend answered 404
    Absent,
    /// Any other failure, kept for diagnostics
    Ignored(ClientError),
}

impl<T> OptionalFetch<T> {
    /// Fold a call result
    ///
    /// `Unauthorized` and `Cancelled` still come back as `Err`: the first has
    /// already torn the session down, the second means nobody is waiting.
    pub fn from_result(result: ClientResult<T>) -> ClientResult<Self> {
        match result {
            Ok(value) => Ok(OptionalFetch::Present(value)),
            Err(err) if err.is_terminal() => Err(err),
            Err(err) if err.is_not_found() => Ok(OptionalFetch::Absent),
            Err(err) => {
                tracing::warn!(error = %err, "Best-effort fetch failed");
                Ok(OptionalFetch::Ignored(err))
            }
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, OptionalFetch::Present(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            OptionalFetch::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn present(self) -> Option<T> {
        match self {
            OptionalFetch::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Default> OptionalFetch<T> {
    pub fn unwrap_or_default(self) -> T {
        self.present().unwrap_or_default()
    }
}

/// Run calls concurrently and wait for all of them
///
/// A failed call contributes `T::default()`. Terminal failures are returned
/// once every call has settled.
pub async fn fan_out<I, F, T>(calls: I) -> ClientResult<Vec<T>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = ClientResult<T>>,
    T: Default,
{
    let results = join_all(calls).await;
    let mut values = Vec::with_capacity(results.len());
    for result in results {
        values.push(OptionalFetch::from_result(result)?.unwrap_or_default());
    }
    Ok(values)
}
