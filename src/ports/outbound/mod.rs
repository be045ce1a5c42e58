/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system, the console and output formats.
pub mod document_writer;
pub mod formatter;
pub mod options_reader;
pub mod progress_reporter;
pub mod sbom_generator;

pub use document_writer::DocumentWriter;
pub use formatter::DocumentFormatter;
pub use options_reader::OptionsReader;
pub use progress_reporter::ProgressReporter;
pub use sbom_generator::SbomGenerator;
