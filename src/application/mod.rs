/// Application layer
///
/// Orchestrates the SBOM generators over an options snapshot. Depends on the
/// domain and on ports only; adapters are injected.
pub mod dto;
pub mod factories;
pub mod use_cases;
