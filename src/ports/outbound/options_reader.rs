use crate::sbom_generation::domain::GenerationOptions;
use crate::shared::Result;
use std::path::Path;

/// OptionsReader port for loading the generation options snapshot
///
/// The snapshot bundles the OS info, the image metadata and the resolved
/// package list produced by the image build.
pub trait OptionsReader {
    /// Reads and parses the options file at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not describe valid
    /// generation options
    fn read_options(&self, path: &Path) -> Result<GenerationOptions>;
}
