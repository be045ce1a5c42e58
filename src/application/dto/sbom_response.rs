use std::path::PathBuf;

/// One document written by a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSbom {
    pub generator: String,
    pub path: PathBuf,
}

/// SbomResponse - Internal response DTO from the SBOM generation use case
#[derive(Debug, Clone, Default)]
pub struct SbomResponse {
    /// Written documents, in generator order
    pub documents: Vec<GeneratedSbom>,
}

impl SbomResponse {
    pub fn new(documents: Vec<GeneratedSbom>) -> Self {
        Self { documents }
    }

    pub fn paths(&self) -> Vec<&PathBuf> {
        self.documents.iter().map(|d| &d.path).collect()
    }
}
