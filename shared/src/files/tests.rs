use super::*;

// =========================================================
// Upload validation
// =========================================================

#[test]
fn document_accepts_pdf_under_cap() {
    assert!(validate_upload(UploadKind::Document, "application/pdf", 1024).is_ok());
}

#[test]
fn document_rejects_non_pdf() {
    let err = validate_upload(UploadKind::Document, "image/png", 1024).unwrap_err();
    assert_eq!(err, UploadError::TypeNotAllowed(UploadKind::Document));
    assert_eq!(err.to_string(), "Only PDF files are allowed");
}

#[test]
fn attachment_accepts_whole_whitelist() {
    for mime in UploadKind::Attachment.allowed_types() {
        assert!(
            validate_upload(UploadKind::Attachment, mime, 1).is_ok(),
            "{mime} should be accepted"
        );
    }
}

#[test]
fn attachment_rejects_unlisted_type() {
    let err = validate_upload(UploadKind::Attachment, "application/zip", 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "File type not allowed. Please upload PDF, Word, text, or image files."
    );
}

#[test]
fn exactly_ten_mib_is_accepted() {
    assert!(validate_upload(UploadKind::Document, "application/pdf", MAX_UPLOAD_BYTES).is_ok());
}

#[test]
fn over_ten_mib_is_rejected() {
    let err =
        validate_upload(UploadKind::Document, "application/pdf", MAX_UPLOAD_BYTES + 1).unwrap_err();
    assert_eq!(err, UploadError::TooLarge);
    assert_eq!(err.to_string(), "File size must be less than 10MB");
}

#[test]
fn twelve_mib_pdf_is_rejected() {
    let err =
        validate_upload(UploadKind::Document, "application/pdf", 12 * 1024 * 1024).unwrap_err();
    assert_eq!(err.to_string(), "File size must be less than 10MB");
}

#[test]
fn type_check_runs_before_size_check() {
    // Oversized AND wrong type: the type message wins.
    let err = validate_upload(UploadKind::Document, "image/gif", 20 * 1024 * 1024).unwrap_err();
    assert_eq!(err, UploadError::TypeNotAllowed(UploadKind::Document));
}

// =========================================================
// Content-Disposition filename extraction
// =========================================================

#[test]
fn filename_from_quoted_header() {
    let header = Some(r#"attachment; filename="feedback_9.pdf""#);
    assert_eq!(attachment_filename(header, "fallback.pdf"), "feedback_9.pdf");
}

#[test]
fn filename_from_unquoted_header() {
    let header = Some("attachment; filename=report.pdf");
    assert_eq!(attachment_filename(header, "fallback.pdf"), "report.pdf");
}

#[test]
fn missing_header_uses_fallback() {
    assert_eq!(attachment_filename(None, "feedback_9.pdf"), "feedback_9.pdf");
}

#[test]
fn header_without_filename_uses_fallback() {
    let header = Some("attachment");
    assert_eq!(attachment_filename(header, "doc.pdf"), "doc.pdf");
}

#[test]
fn empty_filename_uses_fallback() {
    let header = Some(r#"attachment; filename="""#);
    assert_eq!(attachment_filename(header, "doc.pdf"), "doc.pdf");
}

// =========================================================
// Size formatting
// =========================================================

#[test]
fn format_zero_bytes() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn format_plain_bytes() {
    assert_eq!(format_file_size(512), "512 Bytes");
}

#[test]
fn format_whole_units_trim_decimals() {
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
}

#[test]
fn format_fractional_sizes() {
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1024 + 256), "1.25 KB");
}

#[test]
fn format_gigabytes() {
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}
