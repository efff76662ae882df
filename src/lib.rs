//! Keyhaven — credential generation, strength estimation, and an obfuscated
//! local password vault.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod platform;
pub mod services;
pub mod types;
