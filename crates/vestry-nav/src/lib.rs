//! # vestry-nav
//!
//! Capability-gated navigation for Vestry. A navigation menu is declared
//! as data ([`NavEntry`] lists deserialize from JSON or TOML); the
//! [`NavComposer`] filters it down to what the current principal may
//! see and marks the active location. Pure: no network, no mutation.

pub mod composer;
pub mod entry;

pub use composer::{NavComposer, NavItem};
pub use entry::NavEntry;
