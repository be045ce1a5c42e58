/// Use cases module containing application business logic orchestration
mod generate_sbom;

pub use generate_sbom::{output_file_name, GenerateSbomUseCase};
