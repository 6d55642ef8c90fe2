//! Linkshelf: a small bookmark manager.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod api;
pub mod app;
pub mod config;
#[cfg(feature = "sqlite")]
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;

#[cfg(feature = "client")]
pub mod client;
