//! eHIGHWAY - the company site as a terminal application
//!
//! A client-side router maps paths to page views inside a shared navigation
//! shell with a collapsible mobile menu, session history and a scroll reset
//! on every page change.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
