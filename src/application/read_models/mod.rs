//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for formatters.

pub mod assembly_read_model;
pub mod assembly_read_model_builder;
pub mod record_view;

pub use assembly_read_model::{
    AssemblyReadModel, DiagnosticsView, DuplicateView, OrphanView, SelectionView,
    SnapshotMetadataView, SummaryView, TreeNodeView,
};
pub use assembly_read_model_builder::AssemblyReadModelBuilder;
pub use record_view::RecordView;
