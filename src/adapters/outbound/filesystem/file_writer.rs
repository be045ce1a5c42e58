use crate::adapters::outbound::formatters::CycloneDxFormatter;
use crate::ports::outbound::{DocumentFormatter, DocumentWriter};
use crate::sbom_generation::domain::Document;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// DocumentFileWriter adapter for writing encoded SBOM documents to files
///
/// This adapter implements the DocumentWriter port. The document is encoded
/// with the configured formatter after the destination has been created.
pub struct DocumentFileWriter<F = CycloneDxFormatter> {
    formatter: F,
}

impl DocumentFileWriter<CycloneDxFormatter> {
    pub fn new() -> Self {
        Self::with_formatter(CycloneDxFormatter::new())
    }
}

impl Default for DocumentFileWriter<CycloneDxFormatter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: DocumentFormatter> DocumentFileWriter<F> {
    pub fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(SbomError::FileWrite {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Rejects an existing destination that is a symbolic link
    fn validate_output_security(path: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(SbomError::FileWrite {
                    path: path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl<F: DocumentFormatter> DocumentWriter for DocumentFileWriter<F> {
    fn write_document(&self, document: &Document, path: &Path) -> Result<()> {
        Self::validate_parent_directory(path)?;
        Self::validate_output_security(path)?;

        let write_error = |e: std::io::Error| SbomError::FileWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        let mut file = File::create(path).map_err(write_error)?;
        let bytes = self.formatter.encode(document)?;
        file.write_all(&bytes).map_err(write_error)?;
        file.flush().map_err(write_error)?;

        Ok(())
    }
}
