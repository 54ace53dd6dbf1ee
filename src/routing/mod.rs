//! Routing module
//!
//! Maps `(method, path)` pairs onto static outcomes:
//! - Exact, case-sensitive matching in registration order
//! - Anything unmatched resolves to a 404 outcome
//!
//! Nothing here depends on hyper; the handler converts requests into
//! [`Incoming`] and the selected [`Outcome`] back into a response.

mod matcher;
mod table;

pub use matcher::match_route;
pub use table::{
    Incoming, Outcome, RouteError, RouteRule, RouteTable, NOT_FOUND_BODY, TEXT_PLAIN,
};
