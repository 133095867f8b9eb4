//! Utility modules
//!
//! - **error**: crate error type and `Result` alias
//! - **logging**: tracing subscriber setup and secret masking

pub mod error;
pub mod logging;

pub use error::{MonitorError, Result};
pub use logging::{LogFormat, init_logging, mask_token};
