//! Veneer Core Types
//!
//! This crate provides the foundational types used throughout the Veneer
//! system:
//! - Value types (the Value enum with all scalar and list values)
//! - The Properties map and the `props!` construction macro
//! - The PropertyAccess capability trait that target objects implement
//! - PropertyBag, the map-backed reference target
//! - Property-level error types

mod access;
mod bag;
mod error;
mod value;

pub use access::*;
pub use bag::*;
pub use error::*;
pub use value::*;
