//! Trackwise - keep the best audio stream per language when remuxing
//!
//! This library crate exposes the CLI's building blocks for integration testing.

pub mod config;
pub mod processor;
