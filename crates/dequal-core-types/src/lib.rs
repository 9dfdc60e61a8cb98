//! Core types shared across dequal facilities
//!
//! This crate provides foundational types used by the equality engine,
//! the error facility and the logging facility:
//!
//! - **Value kinds**: the closed type-tag taxonomy used for dispatch
//! - **Schema constants**: Canonical field keys and event names

pub mod kind;
pub mod schema;

pub use kind::ValueKind;
