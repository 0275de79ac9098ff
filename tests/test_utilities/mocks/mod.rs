/// Mock implementations for testing
mod mock_boilerplate_source_reader;
mod mock_progress_reporter;

pub use mock_boilerplate_source_reader::MockBoilerplateSourceReader;
pub use mock_progress_reporter::MockProgressReporter;
