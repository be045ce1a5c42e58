use crate::sbom_generation::domain::bom::{BOM_FORMAT, DOCUMENT_VERSION, SPEC_VERSION};
use crate::sbom_generation::domain::{Component, Dependency, Document};
use crate::sbom_generation::services::ComponentTree;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// DocumentAssembler service for wrapping a component tree into the
/// CycloneDX envelope
pub struct DocumentAssembler;

impl DocumentAssembler {
    /// Wraps root components and dependency edges into a document
    ///
    /// # Errors
    /// Returns an error if no root component is given
    pub fn assemble(roots: Vec<Component>, dependencies: Vec<Dependency>) -> Result<Document> {
        if roots.is_empty() {
            return Err(SbomError::Validation {
                message: "an SBOM document needs a root component".to_string(),
            }
            .into());
        }

        Ok(Document {
            bom_format: BOM_FORMAT.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            version: DOCUMENT_VERSION,
            components: roots,
            dependencies,
        })
    }

    /// Wraps a built tree; the tree root becomes the only root component
    pub fn assemble_tree(tree: ComponentTree) -> Result<Document> {
        Self::assemble(vec![tree.root], tree.dependencies)
    }
}
