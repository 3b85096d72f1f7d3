//! Defines custom error types for the application.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a conversion cannot be carried out.
pub enum ConvertError {
    #[error(
        "Could not infer a target MIME type from the output file name{}. Please specify --target_mime.",
        .extension.as_deref().map(|e| format!(" (extension '.{e}')")).unwrap_or_default()
    )]
    UnresolvedMime { extension: Option<String> },

    #[error("Converter not found or not executable: '{}'. Please ensure unoconv is installed, or point --unoconv_path at it.", .path.display())]
    MissingDependency { path: PathBuf },

    #[error("Input file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Conversion failed with exit code {exit_code}: {stderr}")]
    ConversionFailed { exit_code: i32, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
