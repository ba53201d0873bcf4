//! Domain Layer
//!
//! Session state, typed backend contracts, and the ports the wrapper
//! depends on (storage, navigation, relay transport).

pub mod entity;
pub mod navigator;
pub mod session;
pub mod storage;
pub mod transport;
