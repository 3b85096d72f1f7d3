//! `mimevert` converts a file from one MIME type to another by driving an
//! external unoconv installation.
//!
//! The library has two halves: [`mime::resolve`] decides the target MIME type
//! (explicit value or inferred from the output file's extension), and
//! [`convert::Invoker`] validates preconditions and runs the converter,
//! reporting the exit status and captured stderr as a typed result.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use mimevert::convert::Invoker;
//! use mimevert::mime;
//!
//! # fn demo() -> Result<(), mimevert::error::ConvertError> {
//! let target = mime::resolve(None, Path::new("report.pdf"))?;
//! let result = Invoker::new("unoconv").convert(
//!     Path::new("report.docx"),
//!     &target,
//!     Path::new("report.pdf"),
//! )?;
//! assert_eq!(result.exit_code, 0);
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod mime;

pub use convert::{ConversionResult, Invoker};
pub use error::ConvertError;
pub use mime::{resolve, ResolvedTarget};
