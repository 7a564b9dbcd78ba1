//! Profile extractor library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod parser;

pub use config::Config;
pub use error::{ProfileExtractorError, Result};
pub use parser::{ParsedProfile, ProfileParser};
