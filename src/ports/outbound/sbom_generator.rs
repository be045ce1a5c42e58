use crate::sbom_generation::domain::GenerationOptions;
use crate::shared::Result;
use std::path::Path;

/// SbomGenerator port implemented by every SBOM output format
pub trait SbomGenerator {
    /// Registry key of the generator, e.g. `cyclonedx`
    fn key(&self) -> &'static str;

    /// File extension of the generated documents, without the dot
    fn ext(&self) -> &'static str;

    /// Writes the SBOM of a single-architecture layer or image to `path`
    fn generate(&self, options: &GenerationOptions, path: &Path) -> Result<()>;

    /// Writes the SBOM of a multi-architecture image index to `path`
    fn generate_index(&self, options: &GenerationOptions, path: &Path) -> Result<()>;
}
