//! # hostel-app
//!
//! Application layer — the API access layer, page routing, and the
//! **transport port** adapters implement.
//!
//! ## Responsibilities
//! - Define the [`HttpTransport`](ports::HttpTransport) port that carries a
//!   single request to the remote API and returns its raw response
//! - Build requests for the three resources (rooms, guests, bookings) from an
//!   injected [`ApiConfig`](config::ApiConfig) and decode the responses
//! - Classify failures at the boundary (network, client error, server error,
//!   body codec) without retrying, logging, or swallowing them
//! - Map client-side paths to logical pages and load their views on demand
//!
//! ## Dependency rule
//! Depends on `hostel-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod client;
pub mod config;
pub mod error;
pub mod navigator;
pub mod ports;
pub mod routes;
pub mod services;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
