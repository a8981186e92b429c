use std::fmt;

use tracing::debug;

use crate::classname::{self, Unbalanced};
use crate::config::CodegenConfig;
use crate::error::CodeGenError;
use crate::imports::ImportDeclaration;

/// Incrementally assembled Java source text together with the import
/// declaration it needs to compile.
///
/// Appending a qualified class name writes the simple name and registers an
/// import, unless a same-named class from a different package is already
/// imported; in that case the name is written fully qualified and no import
/// is added. The first writer of a simple name wins the short form, so the
/// outcome depends on append order. That order dependence matches the
/// behaviour downstream generators rely on and is kept as-is.
#[derive(Debug, Clone)]
pub struct JavaCodeFragment {
    code: String,
    indent_level: usize,
    pending_indent: bool,
    config: CodegenConfig,
    imports: ImportDeclaration,
}

impl Default for JavaCodeFragment {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaCodeFragment {
    pub fn new() -> Self {
        Self::with_config(CodegenConfig::default())
    }

    pub fn with_config(config: CodegenConfig) -> Self {
        Self {
            code: String::new(),
            indent_level: 0,
            pending_indent: false,
            config,
            imports: ImportDeclaration::new(),
        }
    }

    /// Fragment seeded with existing source text and no imports.
    pub fn from_source(source: &str) -> Self {
        Self {
            code: source.to_string(),
            ..Self::new()
        }
    }

    /// The accumulated body text, without the import block.
    pub fn source(&self) -> &str {
        &self.code
    }

    pub fn is_empty(&self) -> bool {
        self.code.trim().is_empty()
    }

    /// Defensive copy of the import declaration.
    pub fn import_declaration(&self) -> ImportDeclaration {
        self.imports.clone()
    }

    /// Defensive copy of the import declaration with same-package entries
    /// dropped, for emission into a source file of that package.
    pub fn import_declaration_without(&self, package: &str) -> ImportDeclaration {
        self.imports.without_package(package)
    }

    /// Append literal text. Lines started by a previous `appendln` or bracket
    /// call are prefixed with the current indentation first.
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.write_indent();
        self.code.push_str(text);
    }

    pub fn append_char(&mut self, ch: char) {
        self.write_indent();
        self.code.push(ch);
    }

    /// Append the `Display` rendering of a value, covering literal `int`,
    /// `boolean` and similar appends.
    pub fn append_display<T: fmt::Display>(&mut self, value: T) {
        self.write_indent();
        self.code.push_str(&value.to_string());
    }

    /// Append a Java string literal, escaping backslash, quote, newline,
    /// carriage return and tab.
    pub fn append_quoted(&mut self, value: &str) {
        let escaped = value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        self.write_indent();
        self.code.push('"');
        self.code.push_str(&escaped);
        self.code.push('"');
    }

    /// Append text and terminate the line.
    pub fn appendln(&mut self, text: &str) {
        self.append(text);
        self.newline();
    }

    /// Terminate the current line without appending text.
    pub fn appendln_empty(&mut self) {
        self.newline();
    }

    /// Append text and terminate the line, bypassing indentation for the
    /// appended text.
    pub fn appendln_unindented(&mut self, text: &str) {
        self.pending_indent = false;
        self.code.push_str(text);
        self.newline();
    }

    /// Append `{`, terminate the line and increase the indentation level.
    pub fn append_open_bracket(&mut self) {
        self.appendln("{");
        self.indent_level += 1;
    }

    /// Decrease the indentation level, then append `}` and terminate the
    /// line. Unbalanced calls are a caller error; the level saturates at
    /// zero instead of underflowing.
    pub fn append_close_bracket(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.appendln("}");
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Register an import without touching the text buffer. Used when a type
    /// is referenced in a way that never writes its simple name, such as a
    /// static import target.
    pub fn add_import(&mut self, qualified_name: &str) -> Result<(), CodeGenError> {
        self.imports.add(qualified_name)
    }

    /// Append a class name, writing it unqualified where possible and
    /// registering the matching import.
    ///
    /// The name may carry generic type arguments (`java.util.Map<K, V>`,
    /// nested to any depth), wildcard arguments (`? extends a.B`), a
    /// trailing array suffix (`a.B[][]`) and `$`-delimited inner-class
    /// segments. Each top-level generic argument is resolved recursively
    /// through the same import policy. Unbalanced angle brackets fail with
    /// [`CodeGenError::UnbalancedGenerics`], leaving the fragment untouched.
    pub fn append_class_name(&mut self, class_name: &str) -> Result<(), CodeGenError> {
        let trimmed = class_name.trim();
        if trimmed.is_empty() {
            return Err(CodeGenError::InvalidClassName {
                name: class_name.to_string(),
            });
        }
        let normalized = classname::normalize_binary(trimmed);

        // Resolve into a scratch buffer first. The imbalance of a malformed
        // argument list may only surface after part of the name has been
        // resolved; writing through the scratch keeps a failed append from
        // leaving partial text or imports behind. The import set is copied
        // so the collision policy still sees everything registered so far.
        let mut scratch = JavaCodeFragment {
            code: String::new(),
            indent_level: 0,
            pending_indent: false,
            config: self.config.clone(),
            imports: self.imports.clone(),
        };
        scratch.append_resolved(&normalized)?;
        self.append(&scratch.code);
        self.imports = scratch.imports;
        Ok(())
    }

    /// Append a nested class by its binary name, `a.b.Outer$Inner`.
    pub fn append_inner_class_name(&mut self, binary_name: &str) -> Result<(), CodeGenError> {
        self.append_class_name(binary_name)
    }

    fn append_resolved(&mut self, name: &str) -> Result<(), CodeGenError> {
        let (element, dimensions) = classname::strip_array_suffix(name);

        if element == "?" {
            self.append("?");
        } else if let Some(bound) = element.strip_prefix("? extends ") {
            self.append("? extends ");
            self.append_resolved(bound.trim())?;
        } else if let Some(bound) = element.strip_prefix("? super ") {
            self.append("? super ");
            self.append_resolved(bound.trim())?;
        } else if let Some((base, argument_text)) =
            classname::split_generic(element).map_err(|Unbalanced| unbalanced(element))?
        {
            self.append_unqualified(base)?;
            self.append("<");
            let arguments = classname::split_top_level_args(argument_text)
                .map_err(|Unbalanced| unbalanced(element))?;
            for (index, argument) in arguments.iter().enumerate() {
                if index > 0 {
                    self.append(", ");
                }
                self.append_resolved(argument)?;
            }
            self.append(">");
        } else {
            self.append_unqualified(element)?;
        }

        for _ in 0..dimensions {
            self.append("[]");
        }
        Ok(())
    }

    /// The unqualified-name-with-import policy for a single plain name.
    fn append_unqualified(&mut self, name: &str) -> Result<(), CodeGenError> {
        if name.is_empty() {
            return Err(CodeGenError::InvalidClassName {
                name: name.to_string(),
            });
        }
        if let Some(existing) = self.imports.collides_with(name) {
            debug!(
                target: "javagen::imports",
                class = %name,
                existing = %existing,
                "simple name taken, writing qualified"
            );
            self.append(name);
            return Ok(());
        }
        self.append(classname::unqualified(name));
        if name.contains('.') {
            self.imports.add(name)?;
        }
        Ok(())
    }

    /// Splice another fragment: its text is re-indented line by line to the
    /// current indentation context and its imports are unioned into this
    /// fragment. `other` is not mutated.
    pub fn append_fragment(&mut self, other: &JavaCodeFragment) {
        self.imports.add_all(&other.imports);
        // split on the source fragment's own separator, so text built with a
        // different line-ending convention is translated to this fragment's
        let mut lines = other.code.split(other.config.line_separator.as_str()).peekable();
        while let Some(line) = lines.next() {
            if !line.is_empty() {
                self.append(line);
            }
            if lines.peek().is_some() {
                self.newline();
            }
        }
    }

    /// Append string items separated by `, `, with no trailing separator.
    pub fn append_joined<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.append(", ");
            }
            self.append(item.as_ref());
        }
    }

    /// Append fragments separated by `, `, merging each fragment's imports.
    pub fn append_joined_fragments(&mut self, fragments: &[JavaCodeFragment]) {
        for (index, fragment) in fragments.iter().enumerate() {
            if index > 0 {
                self.append(", ");
            }
            self.append_fragment(fragment);
        }
    }

    fn newline(&mut self) {
        self.code.push_str(&self.config.line_separator);
        self.pending_indent = true;
    }

    fn write_indent(&mut self) {
        if !self.pending_indent {
            return;
        }
        self.pending_indent = false;
        for _ in 0..self.indent_level {
            self.code.push_str(&self.config.indent);
        }
    }
}

/// Fragments are equal iff their rendered text and import declarations are
/// equal; the configuration is presentation state and does not participate.
impl PartialEq for JavaCodeFragment {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.imports == other.imports
    }
}

impl Eq for JavaCodeFragment {}

impl fmt::Display for JavaCodeFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.imports.to_source(&self.config.line_separator))?;
        f.write_str(&self.config.line_separator)?;
        f.write_str(&self.code)
    }
}

fn unbalanced(name: &str) -> CodeGenError {
    CodeGenError::UnbalancedGenerics {
        name: name.to_string(),
    }
}
