/// Encoders for SBOM documents
mod cyclonedx_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
