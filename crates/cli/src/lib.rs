//! `update-url` library crate.
//!
//! Exposes the command's pieces for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod prompt;
