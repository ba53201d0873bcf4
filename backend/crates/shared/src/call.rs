//! Call Descriptor - the relay's wire contract
//!
//! A [`CallDescriptor`] describes exactly one intended backend call. Clients
//! build one per call and POST it to the relay; the relay consumes it once.
//!
//! ```json
//! { "url": "/accounts/7", "method": "GET", "headers": {}, "body": null }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// HTTP methods the relay is willing to forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported method: {0}")]
pub struct UnsupportedMethod(pub String);

impl CallMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CallMethod::Get => "GET",
            CallMethod::Post => "POST",
            CallMethod::Put => "PUT",
            CallMethod::Delete => "DELETE",
        }
    }
}

impl FromStr for CallMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(CallMethod::Get),
            "POST" => Ok(CallMethod::Post),
            "PUT" => Ok(CallMethod::Put),
            "DELETE" => Ok(CallMethod::Delete),
            _ => Err(UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for CallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CallMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CallMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One intended backend call
///
/// `url` is always backend-relative (`/accounts/7`); resolving it against the
/// backend origin is the relay's job alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDescriptor {
    pub url: String,
    #[serde(default)]
    pub method: CallMethod,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl CallDescriptor {
    pub fn new(method: CallMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: BTreeMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_authorization(&self) -> bool {
        self.header("authorization").is_some()
    }

    /// Top-level keys of an object body, for diagnostics
    pub fn body_keys(&self) -> Vec<&str> {
        match &self.body {
            Some(Value::Object(map)) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}
