//! `textsieve` - Extract and sanitize sensitive substrings from free text
//!
//! This library finds emails, URLs, phone numbers, credit card numbers,
//! time-of-day expressions and hashtags in text, screens them for injection
//! fragments, and masks emails and card numbers before reporting them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod mask;
pub mod safety;

pub use config::Config;
pub use error::{Error, Result};
pub use extract::{extract, Category, ExtractionResult, Extractor};
pub use logging::init_logging;
pub use safety::{is_safe, SafetyFilter};
