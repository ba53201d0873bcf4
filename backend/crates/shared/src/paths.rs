//! Backend paths with special meaning on the relay path
//!
//! Registration and login are the only calls made before a session exists,
//! so they must never carry a bearer token.

/// User registration
pub const REGISTRATION_PATH: &str = "/users/create";

/// Credential exchange for a JWT
pub const LOGIN_PATH: &str = "/authentication/login";

/// Profile of the currently authenticated user
pub const PROFILE_PATH: &str = "/users/profile";

/// Paths that are called without a session
pub fn is_unauthenticated(path: &str) -> bool {
    path == REGISTRATION_PATH || path == LOGIN_PATH
}
