//! UI screens.

mod app;
mod home_screen;

pub use app::App;
pub use home_screen::{Control, HomeAction, HomeScreen};
