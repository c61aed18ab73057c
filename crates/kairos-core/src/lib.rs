//! Shared configuration, errors, constants and date helpers for Kairos.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
