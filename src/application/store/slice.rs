//! Slice composition.

use std::fmt;

/// Names of the regions of the root state tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceKey {
    /// Authentication state.
    Auth,
}

impl SliceKey {
    /// Every registered slice.
    pub const ALL: [Self; 1] = [Self::Auth];

    /// Key as it appears in the state tree and action types.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
        }
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An independently reducible region of the root state.
pub trait Slice {
    /// Where the slice lives in the root state.
    const KEY: SliceKey;

    /// State owned by the slice.
    type State: Clone + Default + PartialEq;

    /// Actions the slice reacts to.
    type Action;

    /// Applies an action to the slice state.
    fn reduce(state: &mut Self::State, action: &Self::Action);
}
