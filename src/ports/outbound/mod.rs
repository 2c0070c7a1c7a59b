/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (record API, file system, console).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod record_source;

pub use formatter::AssemblyFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use record_source::RecordSource;
