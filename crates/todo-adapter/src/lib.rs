/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public todo adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

pub use auth::AccessToken;

// Re-export commonly used types from http
pub use http::{ClientConfig, ErrorTier, Result, SubmissionResult, TodoClient, TodoError};

pub use types::time::{parse_iso_string, to_iso_string};
pub use types::*;
