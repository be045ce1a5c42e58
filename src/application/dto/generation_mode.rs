/// Which SBOM shape to generate
///
/// Belongs in the application layer because both the CLI and the use case
/// need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// Single-architecture layer or image SBOM (default)
    #[default]
    Image,
    /// Multi-architecture image index SBOM
    Index,
}

impl std::str::FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(GenerationMode::Image),
            "index" => Ok(GenerationMode::Index),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'image' or 'index'",
                s
            )),
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Image => write!(f, "image"),
            GenerationMode::Index => write!(f, "index"),
        }
    }
}
