//! verdash: a client version analytics dashboard for the terminal.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod services;
pub mod types;
pub mod ui;
