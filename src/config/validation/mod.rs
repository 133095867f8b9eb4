//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `validators`: implementations for every configuration section
//! - `tests`: test suite for all validators

mod trait_def;
mod validators;

pub use trait_def::Validate;

/// Smallest polling frequency the service accepts, in seconds
pub const MIN_FREQUENCY: u32 = 10;
