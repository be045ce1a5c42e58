//! Domain layer: the CycloneDX model and the pure logic that builds it
pub mod domain;
pub mod policies;
pub mod services;
