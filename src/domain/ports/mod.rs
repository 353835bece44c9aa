mod auth_port;
mod token_storage_port;

pub use auth_port::AuthPort;
pub use token_storage_port::TokenStoragePort;
