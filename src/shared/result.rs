/// Result alias used across the crate.
///
/// Errors travel as `anyhow::Error`; callers that need the kind (the CLI exit
/// code, for one) downcast to `BomError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
