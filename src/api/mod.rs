// Project server access
pub mod client;
pub mod endpoints;
pub mod error;
pub mod project_api;

// Re-export commonly used items
pub use client::{set_verbose, HttpProjectApi};
pub use error::ApiError;
pub use project_api::{PollOutcome, ProjectApi};
