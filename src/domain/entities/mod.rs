//! Domain entity definitions.

mod credentials;
mod token;

pub use credentials::Credentials;
pub use token::AuthToken;
