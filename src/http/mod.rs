//! HTTP protocol layer module
//!
//! Serializes routing outcomes into hyper responses, decoupled from the
//! routing decisions themselves.

pub mod response;

pub use response::{build_404_response, build_500_response, build_outcome_response};
