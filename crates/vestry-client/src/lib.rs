//! # vestry-client
//!
//! The authenticated HTTP layer for Vestry.
//!
//! ## Modules
//!
//! - `client` — [`ApiClient`], the dual-strategy request client with the
//!   principal→tenant fallback contract all call sites share
//! - `strategy` — the two identity strategies a request can be issued under
//! - `api` — typed flows built on the client: sign-in/out and tenancy
//!   fetch/merge

pub mod api;
pub mod client;
pub mod strategy;

pub use client::{ApiClient, RequestSpec};
pub use strategy::IdentityStrategy;
