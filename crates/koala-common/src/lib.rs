//! Common utilities for the Koala browser.
//!
//! This crate provides shared infrastructure used by all browser components:
//! - **Warning System** - deduplicated diagnostics for unsupported features,
//!   routed through [`tracing`]

pub mod warning;
