mod dependency_declaration;

pub use dependency_declaration::DependencyDeclaration;
