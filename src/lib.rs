//! Todo Presets Library
//!
//! Loads preset templates and materializes them into a user's tag groups, tags
//! and todos.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod preset;
pub mod service;
pub mod store;
pub mod types;
