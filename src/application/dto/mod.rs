/// Data Transfer Objects for application layer
///
/// DTOs carry requests and results between the CLI and the use case,
/// keeping the domain layer isolated.
mod generation_mode;
mod sbom_request;
mod sbom_response;

pub use generation_mode::GenerationMode;
pub use sbom_request::SbomRequest;
pub use sbom_response::{GeneratedSbom, SbomResponse};
