use crate::config::CodegenConfig;
use crate::fragment::JavaCodeFragment;

/// A complete Java compilation unit: package declaration plus one top-level
/// body fragment. Rendering filters imports that live in the unit's own
/// package, since those compile without an import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaSourceFile {
    package: String,
    body: JavaCodeFragment,
}

impl JavaSourceFile {
    pub fn new(package: impl Into<String>, body: JavaCodeFragment) -> Self {
        Self {
            package: package.into(),
            body,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn body(&self) -> &JavaCodeFragment {
        &self.body
    }

    /// Render the full source file: package declaration, import block with
    /// same-package entries dropped, then the body text.
    pub fn to_source(&self, config: &CodegenConfig) -> String {
        let separator = &config.line_separator;
        let mut source = String::new();

        source.push_str("package ");
        source.push_str(&self.package);
        source.push(';');
        source.push_str(separator);
        source.push_str(separator);

        let imports = self.body.import_declaration_without(&self.package);
        if !imports.is_empty() {
            source.push_str(&imports.to_source(separator));
            source.push_str(separator);
        }

        source.push_str(self.body.source());
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_package_imports_are_not_emitted() {
        let mut body = JavaCodeFragment::new();
        body.append("public class Policy extends ");
        body.append_class_name("com.acme.model.AbstractPolicy").unwrap();
        body.append(" ");
        body.append_open_bracket();
        body.append("private ");
        body.append_class_name("java.util.List<com.acme.coverage.Coverage>")
            .unwrap();
        body.appendln(" coverages;");
        body.append_close_bracket();

        let file = JavaSourceFile::new("com.acme.model", body);
        let source = file.to_source(&CodegenConfig::default());

        assert!(source.starts_with("package com.acme.model;\n\n"));
        assert!(source.contains("import java.util.List;\n"));
        assert!(source.contains("import com.acme.coverage.Coverage;\n"));
        assert!(!source.contains("import com.acme.model.AbstractPolicy;"));
        assert!(source.contains("private List<Coverage> coverages;"));
    }

    #[test]
    fn empty_import_block_renders_without_extra_blank_line() {
        let mut body = JavaCodeFragment::new();
        body.appendln("public class Empty {}");

        let file = JavaSourceFile::new("demo", body);
        assert_eq!(
            file.to_source(&CodegenConfig::default()),
            "package demo;\n\npublic class Empty {}\n"
        );
    }
}
