//! Common utilities for the Plume style engine.
//!
//! This crate provides shared infrastructure used by every Plume component:
//! - **Warning System** - deduplicated, colored terminal output for dropped
//!   declarations and unsupported values

pub mod warning;
