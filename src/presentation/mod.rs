//! Presentation layer handling terminal UI and user input.
//!
//! Draws the site chrome and the current view with ratatui, and maps
//! key presses onto application state changes.

pub mod input;
pub mod ui;

pub use input::*;
pub use ui::*;
