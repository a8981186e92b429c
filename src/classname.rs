//! Parsing helpers for qualified Java class names: binary-name normalization,
//! array suffix handling and depth-tracked splitting of generic argument lists.

/// Marker for an unbalanced `<`/`>` pair; callers attach the offending name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unbalanced;

/// Replace `$` separators of binary inner-class names with `.`.
pub(crate) fn normalize_binary(name: &str) -> String {
    name.replace('$', ".")
}

/// The simple name after the last `.`, or the whole name if it has no package.
pub(crate) fn unqualified(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// The package prefix before the last `.`, or the empty string.
pub(crate) fn package_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[..index],
        None => "",
    }
}

/// Strip trailing `[]` pairs, returning the element type and the number of
/// array dimensions removed.
pub(crate) fn strip_array_suffix(name: &str) -> (&str, usize) {
    let mut element = name.trim_end();
    let mut dimensions = 0;
    while let Some(rest) = element.strip_suffix("[]") {
        element = rest.trim_end();
        dimensions += 1;
    }
    (element, dimensions)
}

/// Split `Base<args>` into the base name and the raw argument-list text
/// between the outermost angle brackets. Returns `None` for non-generic
/// names and `Unbalanced` if only one side of the bracket pair is present.
pub(crate) fn split_generic(name: &str) -> Result<Option<(&str, &str)>, Unbalanced> {
    let Some(open) = name.find('<') else {
        if name.contains('>') {
            return Err(Unbalanced);
        }
        return Ok(None);
    };
    if !name.ends_with('>') || name.len() < open + 2 {
        return Err(Unbalanced);
    }
    let base = &name[..open];
    let arguments = &name[open + 1..name.len() - 1];
    Ok(Some((base, arguments)))
}

/// Split a generic argument list on top-level commas only. A comma nested
/// inside another `<...>` pair is part of the enclosing argument, so
/// `String, List<Foo, Bar>` yields exactly two arguments. Each argument is
/// trimmed of surrounding whitespace.
pub(crate) fn split_top_level_args(text: &str) -> Result<Vec<&str>, Unbalanced> {
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut arguments = Vec::new();
    for (index, ch) in text.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                if depth == 0 {
                    return Err(Unbalanced);
                }
                depth -= 1;
            }
            ',' if depth == 0 => {
                arguments.push(text[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Unbalanced);
    }
    arguments.push(text[start..].trim());
    Ok(arguments)
}
