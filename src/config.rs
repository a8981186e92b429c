use serde::{Deserialize, Serialize};

/// Configuration options that drive Java source rendering behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Indentation string used for each nesting level of emitted Java.
    pub indent: String,
    /// Line separator placed at the end of every emitted line.
    pub line_separator: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            line_separator: "\n".to_string(),
        }
    }
}
