use std::path::{Path, PathBuf};

use thiserror::Error;

pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file type '{0}', upload a JPG, JPEG or PNG image")]
    UnsupportedType(String),
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An accepted image payload.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        check_extension(path)?;
        let bytes = std::fs::read(path).map_err(|source| UploadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self { file_name, bytes })
    }
}

pub fn check_extension(path: &Path) -> Result<(), UploadError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(UploadError::UnsupportedType(ext))
    }
}
