use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Could not read post file {}: {source}", path.display())]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("Invalid front matter in {file}: {reason}")]
    FrontMatter { file: String, reason: String },

    #[error("Missing required field '{field}' in {file}")]
    MissingField { file: String, field: &'static str },

    #[error("Could not list posts in {}: {source}", path.display())]
    PostsDir { path: PathBuf, source: io::Error },

    #[error("Failed to write export file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
