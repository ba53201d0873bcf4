//! Value Objects

use reqwest::Url;
use std::fmt;

use crate::error::{RelayError, RelayResult};

/// The single backend origin every call is forwarded to
///
/// Paths from a Call Descriptor are appended to it verbatim, then the result
/// is checked so that no path can change scheme, host, port, or escape the
/// origin's own path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOrigin {
    /// Origin text without trailing slash, e.g. `http://localhost:8888`
    base: String,
    url: Url,
}

impl BackendOrigin {
    pub fn parse(raw: &str) -> RelayResult<Self> {
        let base = raw.trim().trim_end_matches('/').to_string();
        let url = Url::parse(&base).map_err(|e| RelayError::InvalidOrigin(format!("{raw}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(RelayError::InvalidOrigin(format!(
                "{raw}: scheme must be http or https"
            )));
        }
        if url.host_str().is_none() {
            return Err(RelayError::InvalidOrigin(format!("{raw}: missing host")));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(RelayError::InvalidOrigin(format!(
                "{raw}: query and fragment are not allowed"
            )));
        }

        Ok(Self { base, url })
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Resolve a backend-relative path against this origin
    ///
    /// ## Errors
    /// `InvalidPath` when the path is not rooted (`/...`), is
    /// protocol-relative (`//...`), or resolves outside the origin.
    pub fn resolve(&self, path: &str) -> RelayResult<Url> {
        if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
            return Err(RelayError::InvalidPath(path.to_string()));
        }

        let resolved = Url::parse(&format!("{}{}", self.base, path))
            .map_err(|_| RelayError::InvalidPath(path.to_string()))?;

        let same_authority = resolved.scheme() == self.url.scheme()
            && resolved.host_str() == self.url.host_str()
            && resolved.port_or_known_default() == self.url.port_or_known_default()
            && resolved.username() == self.url.username()
            && resolved.password() == self.url.password();

        let prefix = self.url.path().trim_end_matches('/');
        let inside_prefix = resolved.path().starts_with(prefix)
            && resolved.path()[prefix.len()..].starts_with('/');

        if !same_authority || !inside_prefix {
            return Err(RelayError::InvalidPath(path.to_string()));
        }
        Ok(resolved)
    }
}

impl fmt::Display for BackendOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}
