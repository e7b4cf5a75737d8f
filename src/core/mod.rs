//! Core functionality module
//!
//! This module contains the pieces every other module leans on: configuration
//! management and error handling.
//!
//! # Submodules
//!
//! - `config` - Configuration loading, saving, and management
//! - `error` - Error types and result aliases

pub mod config;
pub mod error;
