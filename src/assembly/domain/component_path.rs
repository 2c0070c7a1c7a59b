use std::fmt;

/// Separator used to join path segments for display
pub const DEFAULT_PATH_SEPARATOR: &str = "\\";

/// ComponentPath value object: component names from a root down to a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPath {
    segments: Vec<String>,
}

impl ComponentPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Zero for a root
    pub fn depth(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// The selected component itself, i.e. the last segment
    pub fn current_part(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(DEFAULT_PATH_SEPARATOR))
    }
}
