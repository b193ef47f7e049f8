//! Application layer managing state and navigation workflows.
//!
//! This module sits between the domain layer (routes, pages, navigation
//! state) and the presentation layer (rendering, key handling).

pub mod contact;
pub mod router;
pub mod scroll;
pub mod state;

pub use contact::*;
pub use router::*;
pub use scroll::*;
pub use state::*;
