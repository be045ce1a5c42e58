use image_sbom::prelude::*;
use std::path::Path;

/// Mock OptionsReader returning a fixed options snapshot
pub struct MockOptionsReader {
    options: GenerationOptions,
}

impl MockOptionsReader {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }
}

impl OptionsReader for MockOptionsReader {
    fn read_options(&self, _path: &Path) -> Result<GenerationOptions> {
        Ok(self.options.clone())
    }
}
