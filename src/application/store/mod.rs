//! Reducer-based state store.

mod action;
mod auth_slice;
mod slice;
#[allow(clippy::module_inception)]
mod store;

pub use action::{Action, AuthAction};
pub use auth_slice::{AuthSlice, AuthState};
pub use slice::{Slice, SliceKey};
pub use store::{RootState, Store};
