//! Use case implementations.

mod login_effect;

pub use login_effect::LoginEffect;
