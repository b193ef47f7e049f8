//! Infrastructure layer providing external service integrations.
//!
//! Configuration loading, log output and the system clipboard.

pub mod clipboard;
pub mod config;
pub mod logging;

pub use clipboard::*;
pub use config::*;
pub use logging::*;
