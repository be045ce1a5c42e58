/// Mock implementations for testing
mod mock_options_reader;
mod mock_progress_reporter;

pub use mock_options_reader::MockOptionsReader;
pub use mock_progress_reporter::MockProgressReporter;
