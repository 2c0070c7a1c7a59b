mod build_policy;

pub use build_policy::{BuildPolicy, DuplicatePolicy, OrphanPolicy};
