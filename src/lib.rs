// Export all necessary modules
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod prompt;
pub mod serializer;
pub mod utils;

pub use error::{Error, Result};
