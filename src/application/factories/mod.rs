mod generator_registry;

pub use generator_registry::GeneratorRegistry;
