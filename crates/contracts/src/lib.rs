//! Platform-independent model of the portfolio site.
//!
//! Everything here is plain Rust with no browser dependencies so the
//! filtering, escaping and transition rules can be tested natively.

pub mod config;
pub mod domain;
pub mod shared;
pub mod usecases;
