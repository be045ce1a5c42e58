/// Driving ports exposed to the CLI and other callers
pub mod sbom_generation_port;

pub use sbom_generation_port::SbomGenerationPort;
