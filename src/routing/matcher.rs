//! Route matching module
//!
//! Exact, case-sensitive comparison of method and path, in registration order.

use super::table::{Incoming, RouteRule};

/// Find the first rule matching the request
pub fn match_route<'a>(req: &Incoming<'_>, rules: &'a [RouteRule]) -> Option<&'a RouteRule> {
    rules.iter().find(|rule| matches_rule(rule, req))
}

/// Check if a rule matches a request (method + path)
fn matches_rule(rule: &RouteRule, req: &Incoming<'_>) -> bool {
    rule.method == req.method && rule.path == req.path
}
