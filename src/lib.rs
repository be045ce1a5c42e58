//! image-sbom - CycloneDX SBOM generation for built container images
//!
//! This library turns a snapshot of an image build (OS release, installed APK
//! packages, layer/image/index digests) into CycloneDX 1.4 JSON documents,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): purl construction, dependency
//!   filtering, component trees and documents
//! - **Application Layer** (`application`): Use cases and the generator registry
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use image_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = SbomRequest::new(
//!     PathBuf::from("options.json"),
//!     PathBuf::from("."),
//!     GenerationMode::Image,
//!     vec![],
//! );
//! let response = use_case.execute(request)?;
//!
//! for path in response.paths() {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{DocumentFileWriter, FileSystemReader};
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::generators::CycloneDxGenerator;
    pub use crate::application::dto::{GeneratedSbom, GenerationMode, SbomRequest, SbomResponse};
    pub use crate::application::factories::GeneratorRegistry;
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::inbound::SbomGenerationPort;
    pub use crate::ports::outbound::{
        DocumentFormatter, DocumentWriter, OptionsReader, ProgressReporter, SbomGenerator,
    };
    pub use crate::sbom_generation::domain::{
        ArchImageInfo, Architecture, Component, ComponentType, Dependency, Digest, Document,
        GenerationOptions, ImageInfo, OsInfo, Package,
    };
    pub use crate::sbom_generation::services::{
        ComponentTreeBuilder, DependencyResolver, DocumentAssembler,
    };
    pub use crate::shared::error::SbomError;
    pub use crate::shared::Result;
}
