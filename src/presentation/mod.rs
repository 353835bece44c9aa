//! Presentation layer with UI components and event handling.

/// Headless subcommands.
pub mod cli;
/// Event handling.
pub mod events;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use cli::CommandRunner;
pub use ui::App;
