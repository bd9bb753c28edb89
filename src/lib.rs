//! Shatam - a care marketplace site with role-aware navigation
//!
//! This is the library interface for Shatam, exposing the session store,
//! navigation rules and the HTTP router.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod site;
pub mod ui;

pub use auth::{SessionStore, SessionUser};
pub use config::Config;
pub use error::Error;
