/// Filesystem adapters for reading options and writing SBOM documents
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::DocumentFileWriter;
