//! Navigator Trait

/// Forces a full navigation of the hosting view
///
/// Called once per 401, after the session has been cleared.
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}
