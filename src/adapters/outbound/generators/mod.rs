/// SBOM generator adapters, one per output format
mod cyclonedx_generator;

pub use cyclonedx_generator::CycloneDxGenerator;
