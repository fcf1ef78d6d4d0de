//! # Effects Tour Sample Application
//!
//! Exercise solutions for a chapter on monads, do-notation, effect laws and
//! scoped mutable state, written against effectfold.
//!
//! ## Module Structure
//!
//! - `config`: Environment-driven configuration for the tour binary
//! - `error`: Error types used with the error-or-value capability
//! - `exercises`: The solutions, grouped by the capability they exercise

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod exercises;
