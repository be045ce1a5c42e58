use crate::sbom_generation::domain::Document;
use crate::shared::Result;

/// DocumentFormatter port for encoding an SBOM document
///
/// Implementations must be deterministic: the same document always encodes
/// to the same bytes.
pub trait DocumentFormatter {
    /// Encodes the document
    ///
    /// # Errors
    /// Returns [`SbomError::Encode`](crate::shared::error::SbomError::Encode) if
    /// the document cannot be encoded
    fn encode(&self, document: &Document) -> Result<Vec<u8>>;

    /// Encodes the document into a string
    fn format(&self, document: &Document) -> Result<String> {
        Ok(String::from_utf8(self.encode(document)?)?)
    }
}
