//! File handling rules: upload validation, download filenames, size display.
//!
//! Every upload must pass [`validate_upload`] before a request is built;
//! a rejection carries the exact user-facing message for the form.

use std::fmt::Display;

/// Hard cap for any upload; strictly larger files are rejected.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const DOCUMENT_TYPES: &[&str] = &["application/pdf"];

const ATTACHMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
    "image/jpeg",
    "image/png",
    "image/gif",
];

/// What the file is being uploaded as; decides the MIME whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Personal work documents: PDF only.
    Document,
    /// Assignment and submission files: PDF, Word, text or images.
    Attachment,
}

impl UploadKind {
    pub fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Document => DOCUMENT_TYPES,
            UploadKind::Attachment => ATTACHMENT_TYPES,
        }
    }

    /// `accept` attribute value for the file input.
    pub fn accept_attr(&self) -> &'static str {
        match self {
            UploadKind::Document => ".pdf",
            UploadKind::Attachment => ".pdf,.doc,.docx,.txt,.jpg,.jpeg,.png,.gif",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadError {
    TypeNotAllowed(UploadKind),
    TooLarge,
}

impl Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::TypeNotAllowed(UploadKind::Document) => {
                write!(f, "Only PDF files are allowed")
            }
            UploadError::TypeNotAllowed(UploadKind::Attachment) => {
                write!(
                    f,
                    "File type not allowed. Please upload PDF, Word, text, or image files."
                )
            }
            UploadError::TooLarge => write!(f, "File size must be less than 10MB"),
        }
    }
}

/// Checks a candidate file against the MIME whitelist and the size cap.
///
/// The type check runs first, matching the order the user sees the
/// messages in. Exactly `MAX_UPLOAD_BYTES` is still accepted.
pub fn validate_upload(kind: UploadKind, mime: &str, size: u64) -> Result<(), UploadError> {
    if !kind.allowed_types().contains(&mime) {
        return Err(UploadError::TypeNotAllowed(kind));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

/// Extracts the download filename from a `Content-Disposition` header,
/// falling back to `fallback` when the header is absent or has no
/// filename parameter.
///
/// Semantics match `filename="?(.+)"?`: everything after `filename=` is
/// taken, with one leading and one trailing quote stripped.
pub fn attachment_filename(content_disposition: Option<&str>, fallback: &str) -> String {
    let Some(header) = content_disposition else {
        return fallback.to_string();
    };
    let Some(idx) = header.find("filename=") else {
        return fallback.to_string();
    };
    let mut name = &header[idx + "filename=".len()..];
    name = name.strip_prefix('"').unwrap_or(name);
    name = name.strip_suffix('"').unwrap_or(name);
    if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}

/// Human-readable file size: "0 Bytes", "512 Bytes", "1.5 KB", "2.37 MB".
/// Two decimal places at most, trailing zeros trimmed.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exp = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exp as i32);
    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{} {}", text, UNITS[exp])
}

#[cfg(test)]
mod tests;
