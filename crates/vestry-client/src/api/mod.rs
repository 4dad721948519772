//! Typed API flows built on the dual-strategy client.

pub mod auth;
pub mod tenancy;
