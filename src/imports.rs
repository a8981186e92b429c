use std::fmt;

use tracing::debug;

use crate::classname;
use crate::error::CodeGenError;

/// Order-preserving, deduplicated collection of fully qualified class names
/// required to compile a piece of generated Java source.
///
/// Entries are always stored in dotted form; `$`-delimited binary inner-class
/// names are normalized on insertion. Insertion order is kept for readability
/// of the rendered import block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportDeclaration {
    imports: Vec<String>,
}

impl ImportDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fully qualified class name. Duplicates are ignored, as are
    /// names without a package (primitives and type variables never need an
    /// import). Blank names are a caller error.
    pub fn add(&mut self, qualified_name: &str) -> Result<(), CodeGenError> {
        let trimmed = qualified_name.trim();
        if trimmed.is_empty() {
            return Err(CodeGenError::InvalidClassName {
                name: qualified_name.to_string(),
            });
        }
        let normalized = classname::normalize_binary(trimmed);
        if !normalized.contains('.') {
            return Ok(());
        }
        if !self.imports.iter().any(|entry| *entry == normalized) {
            debug!(target: "javagen::imports", import = %normalized, "registered import");
            self.imports.push(normalized);
        }
        Ok(())
    }

    /// Union all entries of `other` into this declaration, keeping this
    /// declaration's order followed by `other`'s new entries in their order.
    pub fn add_all(&mut self, other: &ImportDeclaration) {
        for entry in &other.imports {
            if !self.imports.iter().any(|existing| existing == entry) {
                self.imports.push(entry.clone());
            }
        }
    }

    /// Filtered copy omitting entries whose package exactly equals `package`.
    /// Classes of the same package need no import in the emitted source file.
    pub fn without_package(&self, package: &str) -> ImportDeclaration {
        ImportDeclaration {
            imports: self
                .imports
                .iter()
                .filter(|entry| classname::package_of(entry) != package)
                .cloned()
                .collect(),
        }
    }

    /// The registered import whose simple name equals `qualified_name`'s but
    /// whose fully qualified form differs. Such an entry forces the caller to
    /// qualify `qualified_name` in the source text to avoid ambiguity.
    pub fn collides_with(&self, qualified_name: &str) -> Option<&str> {
        let simple = classname::unqualified(qualified_name);
        self.imports
            .iter()
            .find(|entry| {
                classname::unqualified(entry) == simple && *entry != qualified_name
            })
            .map(String::as_str)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        let normalized = classname::normalize_binary(qualified_name.trim());
        self.imports.iter().any(|entry| *entry == normalized)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Render `import <fqcn>;` statements, one per line, in insertion order.
    pub fn to_source(&self, line_separator: &str) -> String {
        let mut source = String::new();
        for entry in &self.imports {
            source.push_str("import ");
            source.push_str(entry);
            source.push(';');
            source.push_str(line_separator);
        }
        source
    }
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source("\n"))
    }
}
