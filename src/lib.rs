//! bom-master - browse the assembly hierarchy of a flat bill of materials
//!
//! This library turns a flat list of BOM records, each naming a component and
//! optionally its parent, into a forest of assemblies. It resolves the
//! root-to-part path of any selected part and decides which flat rows describe
//! that part. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`assembly`): Records, the forest, path resolution and row relevance
//! - **Application Layer** (`application`): The browse use case, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_master::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let record_source = FileRecordSource::new(PathBuf::from("records.json"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let mut browser = AssemblyBrowser::new(record_source, progress_reporter, BuildPolicy::default());
//!
//! // Execute
//! let response = browser.execute(BrowseRequest::new(Some(3), "\\")).await?;
//!
//! // Format output
//! let model = AssemblyReadModelBuilder::build(
//!     &response.snapshot,
//!     response.selection.as_ref(),
//!     response.unresolved_selection,
//!     "\\",
//! );
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod assembly;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileRecordSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::HttpRecordSource;
    pub use crate::application::dto::{BrowseRequest, BrowseResponse, OutputFormat};
    pub use crate::application::read_models::{AssemblyReadModel, AssemblyReadModelBuilder};
    pub use crate::application::use_cases::AssemblyBrowser;
    pub use crate::assembly::domain::{
        AssemblyNode, AssemblySnapshot, BomRecord, ComponentPath, Forest, RecordSet, Selection,
    };
    pub use crate::assembly::policies::{BuildPolicy, DuplicatePolicy, OrphanPolicy};
    pub use crate::assembly::services::{PathResolver, RelevanceFilter, TreeBuilder};
    pub use crate::ports::outbound::{
        AssemblyFormatter, OutputPresenter, ProgressReporter, RecordSource,
    };
    pub use crate::shared::Result;
}
