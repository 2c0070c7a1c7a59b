use crate::assembly::domain::DEFAULT_PATH_SEPARATOR;

/// BrowseRequest - request DTO for one browse of the assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseRequest {
    /// Node id to select, if any
    pub selected_id: Option<i64>,
    /// Separator used to join the selection path for display
    pub path_separator: String,
}

impl BrowseRequest {
    pub fn new(selected_id: Option<i64>, path_separator: impl Into<String>) -> Self {
        Self {
            selected_id,
            path_separator: path_separator.into(),
        }
    }
}

impl Default for BrowseRequest {
    fn default() -> Self {
        Self::new(None, DEFAULT_PATH_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = BrowseRequest::default();
        assert_eq!(request.selected_id, None);
        assert_eq!(request.path_separator, "\\");
    }

    #[test]
    fn test_new_request() {
        let request = BrowseRequest::new(Some(3), "/");
        assert_eq!(request.selected_id, Some(3));
        assert_eq!(request.path_separator, "/");
    }
}
