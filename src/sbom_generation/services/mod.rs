mod component_tree_builder;
mod dependency_resolver;
mod document_assembler;

pub use component_tree_builder::{ComponentTree, ComponentTreeBuilder};
pub use dependency_resolver::DependencyResolver;
pub use document_assembler::DocumentAssembler;
