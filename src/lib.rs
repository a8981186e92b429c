//! In-memory Java source assembly with automatic import management.
//!
//! The crate is built around two value-like types. [`ImportDeclaration`]
//! tracks the deduplicated, order-preserving set of fully qualified class
//! names a piece of generated source needs to compile. [`JavaCodeFragment`]
//! accumulates source text and, whenever a class name is appended, decides
//! whether the simple name is safe to write (registering an import) or
//! whether an already-imported same-named class forces qualification.
//! Generic type argument lists are parsed with a depth-tracking scanner, so
//! nested arguments such as `Map<String, List<Foo>>` resolve correctly.
//!
//! [`JavaSourceFile`] ties a fragment to a package and renders a complete
//! compilation unit, dropping imports of the unit's own package.
//!
//! ```
//! use javagen::JavaCodeFragment;
//!
//! let mut fragment = JavaCodeFragment::new();
//! fragment.append("private ");
//! fragment.append_class_name("java.util.Map<java.lang.String, java.math.BigDecimal>")?;
//! fragment.appendln(" premiums;");
//!
//! assert_eq!(fragment.source(), "private Map<String, BigDecimal> premiums;\n");
//! assert!(fragment.import_declaration().contains("java.math.BigDecimal"));
//! # Ok::<(), javagen::CodeGenError>(())
//! ```

mod classname;
mod config;
mod error;
mod fragment;
mod imports;
mod source_file;

pub use config::CodegenConfig;
pub use error::CodeGenError;
pub use fragment::JavaCodeFragment;
pub use imports::ImportDeclaration;
pub use source_file::JavaSourceFile;
