//! Label splitting and joining.
//!
//! Directory names, location headers, and action lines all share the
//! `left - right` shape; area labels chain with `-` and location labels are
//! namespaced under their area with `/`.

/// Separator between a display name and its label.
pub const SEPARATOR: &str = " - ";

/// Separator between an area label and a location slug.
pub const NAMESPACE: char = '/';

/// Separator between a parent area label and a nested area label.
pub const CHAIN: char = '-';

/// Splits `text` on the last [`SEPARATOR`].
///
/// Returns `None` when the separator is absent or the right side is empty.
#[must_use]
pub fn split_labelled(text: &str) -> Option<(&str, &str)> {
    text.rsplit_once(SEPARATOR)
        .filter(|(_, label)| !label.is_empty())
}

/// Prefixes `slug` with `area` unless it already names a namespace.
#[must_use]
pub fn namespaced(area: &str, slug: &str) -> String {
    if slug.contains(NAMESPACE) {
        slug.to_owned()
    } else {
        format!("{area}{NAMESPACE}{slug}")
    }
}

/// Chains a nested area label under its parent.
#[must_use]
pub fn chained(parent: Option<&str>, label: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}{CHAIN}{label}"),
        None => label.to_owned(),
    }
}

/// Whitespace as understood by the line rules: space, tab, CR, LF, VT, FF.
#[must_use]
pub const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}

/// Trims an accumulated description.
///
/// Strips space, tab, CR, LF, NUL, and VT from both ends.
#[must_use]
pub fn trim_block(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n' | '\0' | '\x0B'))
}

/// Splits file content into lines, treating `\r\n` as `\n`.
///
/// Like a plain split, a trailing newline produces a final empty line. A lone
/// `\r` not followed by `\n` is kept.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    let tail = (text.is_empty() || text.ends_with('\n')).then_some("");
    text.split_inclusive('\n')
        .map(|line| match line.strip_suffix('\n') {
            Some(line) => line.strip_suffix('\r').unwrap_or(line),
            None => line,
        })
        .chain(tail)
}
