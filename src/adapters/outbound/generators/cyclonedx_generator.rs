use crate::adapters::outbound::filesystem::DocumentFileWriter;
use crate::ports::outbound::{DocumentWriter, SbomGenerator};
use crate::sbom_generation::domain::GenerationOptions;
use crate::sbom_generation::services::{ComponentTreeBuilder, DocumentAssembler};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// CycloneDxGenerator adapter producing CycloneDX 1.4 JSON SBOMs
///
/// Implements the SbomGenerator port by building the component tree, wrapping
/// it in a document and handing the document to a DocumentWriter.
pub struct CycloneDxGenerator<W = DocumentFileWriter> {
    writer: W,
}

impl CycloneDxGenerator<DocumentFileWriter> {
    pub fn new() -> Self {
        Self::with_writer(DocumentFileWriter::new())
    }
}

impl Default for CycloneDxGenerator<DocumentFileWriter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: DocumentWriter> CycloneDxGenerator<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: DocumentWriter> SbomGenerator for CycloneDxGenerator<W> {
    fn key(&self) -> &'static str {
        "cyclonedx"
    }

    fn ext(&self) -> &'static str {
        "cdx"
    }

    fn generate(&self, options: &GenerationOptions, path: &Path) -> Result<()> {
        let tree = ComponentTreeBuilder::new(options).build_image_tree();
        let document = DocumentAssembler::assemble_tree(tree)?;

        self.writer
            .write_document(&document, path)
            .context("rendering SBOM to disk")
    }

    fn generate_index(&self, options: &GenerationOptions, path: &Path) -> Result<()> {
        let tree = ComponentTreeBuilder::new(options).build_index_tree()?;
        let document = DocumentAssembler::assemble_tree(tree)?;

        self.writer
            .write_document(&document, path)
            .context("rendering index SBOM to disk")
    }
}
