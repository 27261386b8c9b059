/// Download index API module
///
/// This module handles:
/// - Building the version list and download details endpoint URLs
/// - Issuing requests with reqwest
/// - Interpreting list / error-envelope responses

pub mod client;
pub mod response;

pub use client::ApiClient;
pub use response::Listed;
