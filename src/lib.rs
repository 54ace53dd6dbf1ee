//! greeter
//!
//! A deterministic loopback HTTP endpoint for integration-test harnesses.
//!
//! ```text
//!  TCP accept ──▶ server::connection ──▶ handler ──▶ routing::RouteTable
//!   (listener)     (hyper HTTP/1.1)        │              │
//!                                          ◀── http ◀── Outcome
//! ```
//!
//! | Method | Path       | Status | Body             |
//! |--------|------------|--------|------------------|
//! | GET    | `/`        | 200    | `Hello, World!\n` |
//! | GET    | `/evening` | 200    | `Good evening\n`  |
//! | *      | *          | 404    | `404 Not Found\n` |

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
