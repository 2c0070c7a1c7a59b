use crate::application::read_models::AssemblyReadModel;
use crate::shared::Result;

/// AssemblyFormatter port for rendering a browse result
///
/// This port abstracts the rendering of the assembly tree, the selected
/// part's path, and its relevant rows (Markdown, JSON, etc.).
pub trait AssemblyFormatter {
    /// Formats the read model
    ///
    /// # Arguments
    /// * `model` - Read model holding snapshot metadata, the tree outline,
    ///   load diagnostics and the optional selection view
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &AssemblyReadModel) -> Result<String>;
}
