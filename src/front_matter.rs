const MARKER: &str = "---";

/// Drop a leading `---` metadata block.
///
/// The text is split on the marker into at most three parts. Only an exact
/// three-way split counts as a block; anything else leaves the source as is.
pub fn strip_front_matter(source: &str) -> &str {
    if !source.starts_with(MARKER) {
        return source;
    }

    let parts: Vec<&str> = source.splitn(3, MARKER).collect();
    match parts.as_slice() {
        [_, _, body] => body.trim_start(),
        _ => source,
    }
}
