//! Root store.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tracing::debug;

use super::action::Action;
use super::auth_slice::{AuthSlice, AuthState};
use super::slice::{Slice, SliceKey};

const ACTION_CHANNEL_CAPACITY: usize = 64;

/// Root state tree: one field per [`SliceKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootState {
    /// State of the `auth` slice.
    pub auth: AuthState,
}

impl RootState {
    fn reduce(&mut self, action: &Action) {
        match action {
            Action::Auth(action) => AuthSlice::reduce(&mut self.auth, action),
        }
    }

    /// Returns one slice of the tree as JSON.
    #[must_use]
    pub fn slice_json(&self, key: SliceKey) -> serde_json::Value {
        let value = match key {
            SliceKey::Auth => serde_json::to_value(self.auth),
        };
        value.unwrap_or(serde_json::Value::Null)
    }
}

struct StoreInner {
    state: watch::Sender<RootState>,
    actions: broadcast::Sender<Action>,
}

/// Shared handle to the application state.
///
/// Clones point at the same state. Dispatches are applied one at a time in
/// arrival order; state subscribers are only woken when the state changes.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Creates store with initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    /// Creates store with the given state.
    #[must_use]
    pub fn with_state(state: RootState) -> Self {
        let (state, _) = watch::channel(state);
        let (actions, _) = broadcast::channel(ACTION_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(StoreInner { state, actions }),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> RootState {
        self.inner.state.borrow().clone()
    }

    /// Reads a value from the current state without cloning the tree.
    pub fn select<T>(&self, selector: impl FnOnce(&RootState) -> T) -> T {
        selector(&self.inner.state.borrow())
    }

    /// Routes an action to its slice reducer.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        let action_type = action.action_type();

        let changed = self.inner.state.send_if_modified(|state| {
            let before = state.clone();
            state.reduce(&action);
            // Published under the state lock so observers see actions in dispatch order.
            let _ = self.inner.actions.send(action);
            *state != before
        });

        debug!(action = %action_type, changed, "Dispatched action");
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.inner.state.subscribe()
    }

    /// Subscribes to every dispatched action, including effect signals.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<Action> {
        self.inner.actions.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
