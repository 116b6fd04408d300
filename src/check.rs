//! Flower safety checks against the remote API
//!
//! `QueryClient` performs the HTTP calls, `worker` runs them off the UI thread.

mod client;
mod query_error;
mod verdict;
pub mod worker;

pub use client::{ApiStatus, DEFAULT_API_URL, QueryClient};
pub use query_error::{GENERIC_NETWORK_ERROR, QueryError};
pub use verdict::Verdict;
pub use worker::{CheckRequest, CheckResponse};
