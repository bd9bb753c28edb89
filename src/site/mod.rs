//! Site structure: navigation per role and the static content tables

pub mod content;
pub mod nav;

pub use nav::{landing_path, navigation_for_role_name, Destination, JobsView, ProfileView, Viewer};
