//! Resume input collection.
//!
//! Turns an uploaded file or pasted text into raw resume text. Only trivial
//! checks happen here: declared type, emptiness, size. PDF uploads are decoded
//! with `pdf-extract`; the text is not parsed any further.

use crate::error::{IntakeError, ReadError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// MIME type accepted for PDF uploads
pub const PDF_MIME: &str = "application/pdf";

/// MIME type declared for files with an unknown extension
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// How the resume reached the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    File,
    PastedText,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::PastedText => write!(f, "pasted text"),
        }
    }
}

/// Resume text that passed intake validation (never blank)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText(String);

impl RawText {
    /// Wrap text, rejecting empty or whitespace-only input
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// The resume currently held by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedResume {
    pub content: String,
    pub source_kind: SourceKind,
}

impl UploadedResume {
    pub fn new(content: RawText, source_kind: SourceKind) -> Self {
        Self {
            content: content.into_string(),
            source_kind,
        }
    }

    /// Approximate word count, shown as upload confirmation
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Returns true for the declared types an upload may have: PDF and any `text/*`
pub fn is_accepted_type(declared_type: &str) -> bool {
    let declared = declared_type.trim().to_ascii_lowercase();
    declared == PDF_MIME || declared.starts_with("text/")
}

/// Declare a MIME type from a file extension.
///
/// `.doc`/`.docx` are offered by the file picker but declare as unknown
/// binary, so they are rejected on upload.
pub fn declared_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => PDF_MIME,
        Some("txt") | Some("text") => "text/plain",
        Some("md") | Some("markdown") => "text/markdown",
        _ => UNKNOWN_MIME,
    }
}

/// Accept uploaded file content with its declared type.
pub fn accept_file(bytes: &[u8], declared_type: &str) -> Result<RawText, IntakeError> {
    if !is_accepted_type(declared_type) {
        return Err(ValidationError::TypeRejected {
            declared_type: declared_type.to_string(),
        }
        .into());
    }

    let text = if declared_type.trim().eq_ignore_ascii_case(PDF_MIME) {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ReadError::Decode(format!("PDF extraction error: {}", e)))?
    } else {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| ReadError::Decode(format!("file is not valid UTF-8: {}", e)))?
    };

    debug!(declared_type, chars = text.len(), "Decoded uploaded file");
    Ok(RawText::new(text)?)
}

/// Accept pasted resume text. Only blank text is rejected.
pub fn accept_pasted_text(text: &str) -> Result<RawText, ValidationError> {
    RawText::new(text)
}

/// Read a resume file from disk and run it through [`accept_file`].
pub fn read_file(path: &Path, max_bytes: u64) -> Result<RawText, IntakeError> {
    let io_error = |e: std::io::Error| ReadError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let size = fs::metadata(path).map_err(io_error)?.len();
    if size > max_bytes {
        return Err(ReadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_bytes,
        }
        .into());
    }

    let declared = declared_type_for(path);
    // Reject by type before touching the content
    if !is_accepted_type(declared) {
        return Err(ValidationError::TypeRejected {
            declared_type: declared.to_string(),
        }
        .into());
    }

    let bytes = fs::read(path).map_err(io_error)?;
    accept_file(&bytes, declared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_accepted_types() {
        assert!(is_accepted_type("application/pdf"));
        assert!(is_accepted_type("text/plain"));
        assert!(is_accepted_type("TEXT/markdown"));
        assert!(!is_accepted_type("application/msword"));
        assert!(!is_accepted_type("image/png"));
        assert!(!is_accepted_type(""));
    }

    #[test]
    fn test_accept_text_file() {
        let text = accept_file(b"Jane Roe\nEngineer", "text/plain").unwrap();
        assert_eq!(text.as_str(), "Jane Roe\nEngineer");
    }

    #[test]
    fn test_reject_unsupported_type() {
        let err = accept_file(b"content", "application/vnd.ms-word").unwrap_err();
        assert!(matches!(
            err,
            IntakeError::Validation(ValidationError::TypeRejected { .. })
        ));
    }

    #[test]
    fn test_blank_text_file_is_empty_input() {
        let err = accept_file(b"   \n\t", "text/plain").unwrap_err();
        assert_eq!(err, IntakeError::Validation(ValidationError::EmptyInput));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let err = accept_file(&[0xff, 0xfe, 0x00], "text/plain").unwrap_err();
        assert!(matches!(err, IntakeError::Read(ReadError::Decode(_))));
    }

    #[test]
    fn test_garbage_pdf_is_read_error() {
        let err = accept_file(b"not a pdf at all", PDF_MIME).unwrap_err();
        assert!(matches!(err, IntakeError::Read(ReadError::Decode(_))));
    }

    #[test]
    fn test_pasted_text() {
        assert!(accept_pasted_text("John Doe").is_ok());
        assert_eq!(accept_pasted_text(""), Err(ValidationError::EmptyInput));
        assert_eq!(accept_pasted_text("  \n  "), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_declared_type_from_extension() {
        assert_eq!(declared_type_for(Path::new("cv.PDF")), PDF_MIME);
        assert_eq!(declared_type_for(Path::new("cv.txt")), "text/plain");
        assert_eq!(declared_type_for(Path::new("cv.md")), "text/markdown");
        assert_eq!(declared_type_for(Path::new("cv.docx")), UNKNOWN_MIME);
        assert_eq!(declared_type_for(Path::new("resume")), UNKNOWN_MIME);
    }

    #[test]
    fn test_read_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "John Doe, Engineer").unwrap();

        let text = read_file(&path, 1024).unwrap();
        assert!(text.as_str().starts_with("John Doe"));
    }

    #[test]
    fn test_read_file_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, "x".repeat(64)).unwrap();

        let err = read_file(&path, 16).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::Read(ReadError::TooLarge { size: 64, limit: 16, .. })
        ));
    }

    #[test]
    fn test_read_file_rejects_docx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        fs::write(&path, "PK\x03\x04").unwrap();

        let err = read_file(&path, 1024).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::Validation(ValidationError::TypeRejected { .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/nonexistent/resume.txt"), 1024).unwrap_err();
        assert!(matches!(err, IntakeError::Read(ReadError::Io { .. })));
    }

    #[test]
    fn test_uploaded_resume_word_count() {
        let resume = UploadedResume::new(
            RawText::new("John Doe  Senior Engineer\nRust").unwrap(),
            SourceKind::PastedText,
        );
        assert_eq!(resume.word_count(), 5);
    }
}
