/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod boilerplate_source_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use boilerplate_source_reader::BoilerplateSourceReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
