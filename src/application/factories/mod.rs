mod formatter_factory;
mod presenter_factory;
mod record_source_factory;

pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
pub use record_source_factory::{RecordSourceFactory, SourceKind};
