//! Linkshelf — a console client for a bookmark-manager web service.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod client;
pub mod commands;
pub mod managers;
pub mod services;
pub mod types;
