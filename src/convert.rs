//! External converter invocation.
//!
//! The [`Invoker`] wraps the configured unoconv executable. It validates its
//! preconditions (input file present, converter present and executable) before
//! spawning anything, then runs the converter synchronously and maps a
//! non-zero exit status to [`ConvertError::ConversionFailed`]. The output file
//! is written by the converter itself, never by this module.

use crate::error::ConvertError;
use crate::mime::{format_for_mime, ResolvedTarget};
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of a completed converter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub success: bool,
    pub exit_code: i32,
    pub stderr_text: String,
}

/// Runs an external converter executable against a single input file.
#[derive(Debug, Clone)]
pub struct Invoker {
    converter_path: PathBuf,
}

impl Invoker {
    /// Creates an invoker for the converter at `converter_path`. A bare
    /// command name (no directory component) is looked up on `PATH` at
    /// conversion time.
    pub fn new(converter_path: impl Into<PathBuf>) -> Self {
        Self {
            converter_path: converter_path.into(),
        }
    }

    /// Converts `source` into `output`, producing the format named by
    /// `target`.
    ///
    /// Blocks until the converter exits; there is no timeout. On a zero exit
    /// status the converter has created or overwritten `output`.
    pub fn convert(
        &self,
        source: &Path,
        target: &ResolvedTarget,
        output: &Path,
    ) -> Result<ConversionResult, ConvertError> {
        if !source.is_file() {
            return Err(ConvertError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }

        let converter = locate_executable(&self.converter_path)?;
        let format = output_format(target, output)?;

        // Hand the converter an absolute input path so its own working
        // directory does not matter.
        let source = fs::canonicalize(source)?;

        log::info!(
            "Executing: {} -f {} -o {} {}",
            converter.display(),
            format,
            output.display(),
            source.display()
        );

        let out = Command::new(&converter)
            .arg("-f")
            .arg(format)
            .arg("-o")
            .arg(output)
            .arg(&source)
            .output()?;

        let stderr_text = String::from_utf8_lossy(&out.stderr).into_owned();
        // A None exit code means the child was killed by a signal.
        let exit_code = out.status.code().unwrap_or(-1);

        if !out.status.success() {
            return Err(ConvertError::ConversionFailed {
                exit_code,
                stderr: stderr_text,
            });
        }

        Ok(ConversionResult {
            success: true,
            exit_code,
            stderr_text,
        })
    }
}

/// Picks the unoconv `-f` format name: the canonical extension for the
/// resolved MIME type, falling back to the output file's own extension for
/// MIME types outside the table.
fn output_format<'a>(
    target: &'a ResolvedTarget,
    output: &'a Path,
) -> Result<&'a str, ConvertError> {
    if let Some(format) = format_for_mime(&target.mime_type) {
        return Ok(format);
    }
    output
        .extension()
        .and_then(|e| e.to_str())
        .ok_or(ConvertError::UnresolvedMime { extension: None })
}

/// Resolves the converter path to an existing executable file, searching
/// `PATH` when the configured value is a bare command name.
fn locate_executable(converter_path: &Path) -> Result<PathBuf, ConvertError> {
    let missing = || ConvertError::MissingDependency {
        path: converter_path.to_path_buf(),
    };

    if converter_path.components().count() > 1 {
        if is_executable_file(converter_path) {
            return Ok(converter_path.to_path_buf());
        }
        return Err(missing());
    }

    let path_var = env::var_os("PATH").ok_or_else(missing)?;
    search_path_dirs(&path_var, converter_path).ok_or_else(missing)
}

/// Searches the directories of a `PATH`-style value for an executable named
/// `name`.
fn search_path_dirs(path_var: &OsStr, name: &Path) -> Option<PathBuf> {
    env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable_file(candidate))
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
