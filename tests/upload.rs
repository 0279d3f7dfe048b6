use std::fs;
use std::path::Path;

use lung_triage::upload::{Upload, UploadError, check_extension};
use tempfile::TempDir;

#[test]
fn accepted_extensions() {
    for name in ["a.jpg", "a.jpeg", "a.png", "A.PNG", "scan.JPeG"] {
        assert!(check_extension(Path::new(name)).is_ok(), "{name}");
    }
}

#[test]
fn other_extensions_rejected() {
    for name in ["a.gif", "a.bmp", "a", "a.png.txt", "a.dcm"] {
        assert!(
            matches!(
                check_extension(Path::new(name)),
                Err(UploadError::UnsupportedType(_))
            ),
            "{name}"
        );
    }
}

#[test]
fn upload_reads_bytes() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("xray.png");
    fs::write(&path, b"not really a png").unwrap();
    let upload = Upload::from_path(&path).unwrap();
    assert_eq!(upload.file_name, "xray.png");
    assert_eq!(upload.bytes, b"not really a png");
}

#[test]
fn missing_upload_reports_read_error() {
    let tmp = TempDir::new().unwrap();
    let err = Upload::from_path(&tmp.path().join("gone.jpg")).unwrap_err();
    assert!(matches!(err, UploadError::Read { .. }));
}

#[test]
fn rejected_before_reading() {
    let err = Upload::from_path(Path::new("/nonexistent/report.pdf")).unwrap_err();
    assert!(err.to_string().contains("unsupported file type 'pdf'"));
}
