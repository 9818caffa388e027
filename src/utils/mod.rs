//! Shared utilities.

pub mod jwt;
