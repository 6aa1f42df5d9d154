use super::RenderError;

/// Configuration parameters for graph output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Name written after `digraph`; must be a DOT identifier.
    pub graph_name: String,
    /// Include each node's tag in its label.
    pub show_tags: bool,
    /// Draw a node reachable from several parents or trees only once.
    pub share_nodes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            graph_name: "G".to_string(),
            show_tags: true,
            share_nodes: true,
        }
    }
}

impl RenderConfig {
    /// Set the graph name.
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    /// Enable or disable tag labels.
    pub fn with_tags(mut self, enabled: bool) -> Self {
        self.show_tags = enabled;
        self
    }

    /// Enable or disable node sharing.
    pub fn with_sharing(mut self, enabled: bool) -> Self {
        self.share_nodes = enabled;
        self
    }

    /// Check the graph name is an unquoted DOT identifier: letters, digits
    /// and `_`, not starting with a digit.
    pub fn validate(&self) -> Result<(), RenderError> {
        let mut chars = self.graph_name.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        if !valid {
            return Err(RenderError::InvalidConfiguration(format!(
                "graph name {:?} is not a DOT identifier",
                self.graph_name
            )));
        }
        Ok(())
    }
}
