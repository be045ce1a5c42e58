use crate::adapters::outbound::generators::CycloneDxGenerator;
use crate::ports::outbound::SbomGenerator;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Registry of SBOM generators, keyed by [`SbomGenerator::key`]
///
/// Generators are kept in registration order, which is also the order in
/// which "all generators" runs them.
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn SbomGenerator>>,
}

impl GeneratorRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Registers a generator, replacing any generator with the same key
    pub fn register(&mut self, generator: Box<dyn SbomGenerator>) {
        self.generators.retain(|g| g.key() != generator.key());
        self.generators.push(generator);
    }

    /// Looks up a generator by key
    ///
    /// # Errors
    /// Returns [`SbomError::UnknownGenerator`] listing the registered keys
    pub fn get(&self, key: &str) -> Result<&dyn SbomGenerator> {
        self.generators
            .iter()
            .find(|g| g.key() == key)
            .map(|g| &**g)
            .ok_or_else(|| {
                SbomError::UnknownGenerator {
                    key: key.to_string(),
                    available: self.keys().join(", "),
                }
                .into()
            })
    }

    /// Resolves the generators to run; an empty key list selects all of them
    pub fn select(&self, keys: &[String]) -> Result<Vec<&dyn SbomGenerator>> {
        if keys.is_empty() {
            return Ok(self.generators.iter().map(|g| &**g).collect());
        }
        keys.iter().map(|key| self.get(key)).collect()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.key()).collect()
    }
}

impl Default for GeneratorRegistry {
    /// Registry with every built-in generator
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CycloneDxGenerator::new()));
        registry
    }
}
