mod path_resolver;
mod relevance_filter;
mod snapshot_generator;
mod tree_builder;

pub use path_resolver::PathResolver;
pub use relevance_filter::{RelevanceFilter, RelevantRows, RowsKind};
pub use snapshot_generator::{SnapshotGenerator, TOOL_NAME};
pub use tree_builder::TreeBuilder;
