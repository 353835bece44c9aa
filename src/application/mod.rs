//! Application layer with the state store and effects.

/// Reducer-based state store.
pub mod store;
/// Use case implementations.
pub mod use_cases;

pub use store::{Action, AuthAction, AuthState, RootState, Store};
pub use use_cases::LoginEffect;
