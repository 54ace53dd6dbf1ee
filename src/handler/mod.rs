//! Request handler module
//!
//! Bridges hyper requests and the routing table.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
