//! Target MIME type resolution.
//!
//! The resolver decides what format the converter should produce: an explicit
//! `--target_mime` value wins, otherwise the output file's extension is looked
//! up in a fixed extension-to-MIME table. Resolution is a pure function of its
//! inputs and performs no filesystem access.

use crate::error::ConvertError;
use std::path::Path;

/// The target format for a conversion, as decided by [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub mime_type: String,
}

/// Extensions unoconv can produce, paired with their MIME types.
///
/// The first entry for a given MIME type is its canonical extension, which
/// doubles as unoconv's `-f` format name (see [`format_for_mime`]).
static EXTENSION_TABLE: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("ott", "application/vnd.oasis.opendocument.text-template"),
    ("rtf", "application/rtf"),
    ("txt", "text/plain"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("xml", "application/xml"),
    ("epub", "application/epub+zip"),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
    ("csv", "text/csv"),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("odp", "application/vnd.oasis.opendocument.presentation"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("svg", "image/svg+xml"),
    ("md", "text/markdown"),
];

/// Determines the target MIME type for a conversion.
///
/// A non-empty `target_mime` is used verbatim. Otherwise the extension of
/// `output_path` is looked up in the table; an absent or unrecognized
/// extension fails with [`ConvertError::UnresolvedMime`].
pub fn resolve(
    target_mime: Option<&str>,
    output_path: &Path,
) -> Result<ResolvedTarget, ConvertError> {
    if let Some(mime) = target_mime {
        if !mime.is_empty() {
            return Ok(ResolvedTarget {
                mime_type: mime.to_string(),
            });
        }
    }

    let extension = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let Some(ext) = extension else {
        return Err(ConvertError::UnresolvedMime { extension: None });
    };

    match mime_for_extension(&ext) {
        Some(mime) => Ok(ResolvedTarget {
            mime_type: mime.to_string(),
        }),
        None => Err(ConvertError::UnresolvedMime {
            extension: Some(ext),
        }),
    }
}

/// Looks up the MIME type registered for a file extension (without the dot).
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    EXTENSION_TABLE
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Returns the canonical extension for a MIME type, which is also the format
/// name unoconv expects after `-f`. `None` when the type is not in the table.
pub fn format_for_mime(mime: &str) -> Option<&'static str> {
    EXTENSION_TABLE
        .iter()
        .find(|(_, m)| *m == mime)
        .map(|(ext, _)| *ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("out.pdf", "application/pdf")]
    #[case("out.doc", "application/msword")]
    #[case("out.docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document")]
    #[case("out.odt", "application/vnd.oasis.opendocument.text")]
    #[case("out.ott", "application/vnd.oasis.opendocument.text-template")]
    #[case("out.rtf", "application/rtf")]
    #[case("out.txt", "text/plain")]
    #[case("out.html", "text/html")]
    #[case("out.htm", "text/html")]
    #[case("out.xml", "application/xml")]
    #[case("out.epub", "application/epub+zip")]
    #[case("out.xls", "application/vnd.ms-excel")]
    #[case("out.xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")]
    #[case("out.ods", "application/vnd.oasis.opendocument.spreadsheet")]
    #[case("out.csv", "text/csv")]
    #[case("out.ppt", "application/vnd.ms-powerpoint")]
    #[case("out.pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation")]
    #[case("out.odp", "application/vnd.oasis.opendocument.presentation")]
    #[case("out.png", "image/png")]
    #[case("out.jpg", "image/jpeg")]
    #[case("out.jpeg", "image/jpeg")]
    #[case("out.svg", "image/svg+xml")]
    #[case("out.md", "text/markdown")]
    fn infers_mime_from_extension(#[case] output: &str, #[case] expected: &str) {
        let target = resolve(None, Path::new(output)).unwrap();
        assert_eq!(target.mime_type, expected);
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        let target = resolve(None, Path::new("Report.PDF")).unwrap();
        assert_eq!(target.mime_type, "application/pdf");
    }

    #[test]
    fn explicit_mime_is_used_verbatim() {
        let target = resolve(Some("application/x-custom"), Path::new("out.pdf")).unwrap();
        assert_eq!(target.mime_type, "application/x-custom");
    }

    #[test]
    fn empty_explicit_mime_falls_back_to_extension() {
        let target = resolve(Some(""), Path::new("out.pdf")).unwrap();
        assert_eq!(target.mime_type, "application/pdf");
    }

    #[rstest]
    #[case("out.xyzzy", Some("xyzzy"))]
    #[case("out", None)]
    fn unknown_or_missing_extension_is_unresolved(
        #[case] output: &str,
        #[case] expected_ext: Option<&str>,
    ) {
        let err = resolve(None, Path::new(output)).unwrap_err();
        match err {
            ConvertError::UnresolvedMime { extension } => {
                assert_eq!(extension.as_deref(), expected_ext);
            }
            other => panic!("expected UnresolvedMime, got {other:?}"),
        }
    }

    #[test]
    fn format_round_trips_through_canonical_extension() {
        assert_eq!(format_for_mime("application/pdf"), Some("pdf"));
        assert_eq!(format_for_mime("text/html"), Some("html"));
        assert_eq!(format_for_mime("application/x-custom"), None);
    }
}
