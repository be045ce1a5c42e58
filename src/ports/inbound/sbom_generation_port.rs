use crate::application::dto::{SbomRequest, SbomResponse};
use crate::shared::Result;

/// SbomGenerationPort - Inbound port for the SBOM generation use case
///
/// This port defines the interface that external adapters (CLI, build tools)
/// use to trigger SBOM generation for a built image.
pub trait SbomGenerationPort {
    /// Generates one SBOM document per requested generator
    ///
    /// # Arguments
    /// * `request` - Options file, output directory, mode and generator keys
    ///
    /// # Returns
    /// The paths of the written documents, in generator order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The options file cannot be read or parsed
    /// - The output directory is invalid
    /// - A generator key is unknown
    /// - A document cannot be built or written
    fn generate_sboms(&self, request: SbomRequest) -> Result<SbomResponse>;
}
