use crate::ports::outbound::DocumentFormatter;
use crate::sbom_generation::domain::Document;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// CycloneDxFormatter adapter for encoding CycloneDX 1.4 JSON
///
/// Output is indented with two spaces and ends with a newline. Field order
/// follows the declaration order of the document model, so identical
/// documents always encode to identical bytes.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for CycloneDxFormatter {
    fn encode(&self, document: &Document) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"  "));

        document
            .serialize(&mut serializer)
            .map_err(|e| SbomError::Encode {
                details: e.to_string(),
            })?;

        buffer.push(b'\n');
        Ok(buffer)
    }
}
