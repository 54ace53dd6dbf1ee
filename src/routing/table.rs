//! Route table module
//!
//! Holds the immutable set of route rules and the value types flowing
//! through dispatch.

use std::collections::HashSet;

use thiserror::Error;

use super::matcher::match_route;

/// Content type used by every built-in rule and the not-found outcome
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Body returned when no rule matches
pub const NOT_FOUND_BODY: &str = "404 Not Found\n";

/// Request as seen by the router: method and path only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incoming<'a> {
    pub method: &'a str,
    pub path: &'a str,
}

impl<'a> Incoming<'a> {
    pub const fn new(method: &'a str, path: &'a str) -> Self {
        Self { method, path }
    }
}

/// Response selected by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<'a> {
    pub status: u16,
    pub content_type: &'a str,
    pub body: &'a str,
}

impl Outcome<'static> {
    pub const fn not_found() -> Self {
        Self {
            status: 404,
            content_type: TEXT_PLAIN,
            body: NOT_FOUND_BODY,
        }
    }
}

/// A static mapping from `(method, path)` to a fixed response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

impl RouteRule {
    /// Plain-text 200 rule
    pub fn new(method: &str, path: &str, body: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status: 200,
            content_type: TEXT_PLAIN.to_string(),
            body: body.to_string(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    pub fn outcome(&self) -> Outcome<'_> {
        Outcome {
            status: self.status,
            content_type: &self.content_type,
            body: &self.body,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("duplicate route: {method} {path}")]
    Duplicate { method: String, path: String },
}

/// Ordered, read-only set of route rules
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    /// Build a table, rejecting any repeated `(method, path)` pair
    pub fn new(rules: Vec<RouteRule>) -> Result<Self, RouteError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert((rule.method.as_str(), rule.path.as_str())) {
                return Err(RouteError::Duplicate {
                    method: rule.method.clone(),
                    path: rule.path.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// The two greeting routes served by the binary
    pub fn greetings() -> Result<Self, RouteError> {
        Self::new(vec![
            RouteRule::new("GET", "/", "Hello, World!\n"),
            RouteRule::new("GET", "/evening", "Good evening\n"),
        ])
    }

    /// Select the outcome for a request. Total: unmatched input yields 404.
    pub fn dispatch(&self, req: &Incoming<'_>) -> Outcome<'_> {
        match match_route(req, &self.rules) {
            Some(rule) => rule.outcome(),
            None => Outcome::not_found(),
        }
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
