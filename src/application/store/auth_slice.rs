//! Authentication slice.

use serde::Serialize;
use tracing::debug;

use super::action::AuthAction;
use super::slice::{Slice, SliceKey};

/// Whether the session is considered logged in.
///
/// The flag is set only by explicit actions. It is not derived from token
/// presence, so it can disagree with the token store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// Authentication flag.
    pub is_authenticated: bool,
}

/// Reducer for [`AuthState`].
pub struct AuthSlice;

impl Slice for AuthSlice {
    const KEY: SliceKey = SliceKey::Auth;

    type State = AuthState;
    type Action = AuthAction;

    fn reduce(state: &mut AuthState, action: &AuthAction) {
        match action {
            AuthAction::Login => state.is_authenticated = true,
            AuthAction::Logout => state.is_authenticated = false,
            AuthAction::LoginPending
            | AuthAction::LoginFulfilled(_)
            | AuthAction::LoginRejected(_) => {
                debug!(action = action.name(), "Effect signal leaves auth flag unchanged");
            }
        }
    }
}
