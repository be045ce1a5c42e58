use super::GenerationMode;
use std::path::PathBuf;

/// SbomRequest - Internal request DTO for the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// JSON or YAML file holding the generation options snapshot
    pub options_path: PathBuf,
    /// Directory the documents are written to
    pub output_dir: PathBuf,
    pub mode: GenerationMode,
    /// Generator keys to run; empty means every registered generator
    pub generator_keys: Vec<String>,
}

impl SbomRequest {
    pub fn new(
        options_path: PathBuf,
        output_dir: PathBuf,
        mode: GenerationMode,
        generator_keys: Vec<String>,
    ) -> Self {
        Self {
            options_path,
            output_dir,
            mode,
            generator_keys,
        }
    }
}
