pub mod assembly_node;
pub mod bom_record;
pub mod build_diagnostics;
pub mod component_path;
pub mod forest;
pub mod record_set;
pub mod selection;
pub mod snapshot;

pub use assembly_node::AssemblyNode;
pub use bom_record::BomRecord;
pub use build_diagnostics::{BuildDiagnostics, CollapsedDuplicate, DroppedOrphan};
pub use component_path::{ComponentPath, DEFAULT_PATH_SEPARATOR};
pub use forest::{BreadthFirst, Forest};
pub use record_set::RecordSet;
pub use selection::Selection;
pub use snapshot::{AssemblySnapshot, SnapshotMetadata};
