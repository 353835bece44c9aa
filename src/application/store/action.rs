//! Actions routed through the store.

use crate::domain::entities::AuthToken;
use crate::domain::errors::AuthError;

use super::slice::SliceKey;

/// Actions handled by the auth slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Marks the session authenticated.
    Login,
    /// Marks the session unauthenticated.
    Logout,
    /// The login effect has started.
    LoginPending,
    /// The login effect produced a token.
    LoginFulfilled(AuthToken),
    /// The login effect failed.
    LoginRejected(AuthError),
}

impl AuthAction {
    /// Action name within the slice.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::LoginPending => "login/pending",
            Self::LoginFulfilled(_) => "login/fulfilled",
            Self::LoginRejected(_) => "login/rejected",
        }
    }

    /// Returns whether this is a completion signal from the login effect.
    #[must_use]
    pub const fn is_effect_signal(&self) -> bool {
        matches!(
            self,
            Self::LoginPending | Self::LoginFulfilled(_) | Self::LoginRejected(_)
        )
    }
}

/// Any action the root store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Routed to the `auth` slice.
    Auth(AuthAction),
}

impl Action {
    /// Slice the action is routed to.
    #[must_use]
    pub const fn slice(&self) -> SliceKey {
        match self {
            Self::Auth(_) => SliceKey::Auth,
        }
    }

    /// Full action type, e.g. `auth/login/pending`.
    #[must_use]
    pub fn action_type(&self) -> String {
        let name = match self {
            Self::Auth(action) => action.name(),
        };
        format!("{}/{name}", self.slice())
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(AuthAction::Login, "auth/login" ; "login")]
    #[test_case(AuthAction::Logout, "auth/logout" ; "logout")]
    #[test_case(AuthAction::LoginPending, "auth/login/pending" ; "pending")]
    #[test_case(AuthAction::LoginFulfilled(AuthToken::new("t")), "auth/login/fulfilled" ; "fulfilled")]
    #[test_case(AuthAction::LoginRejected(AuthError::unexpected()), "auth/login/rejected" ; "rejected")]
    fn test_action_type(action: AuthAction, expected: &str) {
        assert_eq!(Action::from(action).action_type(), expected);
    }

    #[test]
    fn test_effect_signals() {
        assert!(!AuthAction::Login.is_effect_signal());
        assert!(!AuthAction::Logout.is_effect_signal());
        assert!(AuthAction::LoginPending.is_effect_signal());
    }
}
