//! Token storage adapters.

mod local_storage;

pub use local_storage::{LocalStorage, LocalTokenStorage, TOKEN_KEY};
