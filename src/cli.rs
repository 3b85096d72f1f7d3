//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mimevert",
    version,
    about = "Convert a file to another MIME type using an external unoconv installation."
)]
pub struct Cli {
    /// The input file to convert.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// The output file to save the conversion to.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// The target MIME type. [default: inferred from the output file extension]
    #[arg(long = "target_mime", value_name = "MIME_TYPE")]
    pub target_mime: Option<String>,

    /// Path to the unoconv executable.
    #[arg(long = "unoconv_path", value_name = "PATH", default_value = "unoconv")]
    pub unoconv_path: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}
