//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AuthToken, Credentials};
pub use errors::{AuthError, StorageError};
pub use ports::{AuthPort, TokenStoragePort};
