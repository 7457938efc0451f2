//! Core types and configuration for the air-quality algorithms.
//!
//! This crate provides shared types used across all other crates:
//! - Hourly measurement series and the missing-value marker
//! - Summary statistics outputs (daily, diurnal)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
