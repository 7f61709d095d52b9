/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and classified submission outcomes
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod task;

pub use error::{ErrorTier, Result, TodoError};

pub use client::{ClientConfig, TodoClient};
pub use task::SubmissionResult;
