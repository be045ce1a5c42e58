use crate::sbom_generation::domain::Document;
use crate::shared::Result;
use std::path::Path;

/// DocumentWriter port for persisting an encoded SBOM document
pub trait DocumentWriter {
    /// Creates (or truncates) `path` and writes the encoded document to it
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination cannot be created or written
    /// - The document cannot be encoded
    ///
    /// A failure may leave a truncated file behind.
    fn write_document(&self, document: &Document, path: &Path) -> Result<()>;
}
