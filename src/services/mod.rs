//! External service interactions
//!
//! - Breed list fetching over HTTP

pub mod breeds_api;

pub use breeds_api::fetch_breeds;
