// Chunk: docs/chunks/tab_bar_interaction - Shortest unique path suffixes

use std::path::MAIN_SEPARATOR;

/// Marker for path segments that were elided.
pub const ELLIPSIS: char = '…';

const UNC_PREFIX: &str = "\\\\";
const HOME_PREFIX: &str = "~";

/// Shortens each path to the smallest run of segments that no other path in
/// the list contains, using the platform separator.
///
/// The result has one entry per input, in the same order. See
/// [`shorten_with`] for the details.
pub fn shorten<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    shorten_with(paths, MAIN_SEPARATOR)
}

/// Shortens each path to the smallest run of segments that no other path in
/// the list contains.
///
/// Runs are tried shortest first and, for each length, from the end of the
/// path towards the start. Elided segments are replaced by [`ELLIPSIS`]. A
/// drive letter or root prefix is kept in front of the shortened run. An
/// empty path becomes `".{separator}"`, and a path with no unique run is
/// returned without its root prefix.
pub fn shorten_with<S: AsRef<str>>(paths: &[S], separator: char) -> Vec<String> {
    let paths: Vec<&str> = paths.iter().map(AsRef::as_ref).collect();
    (0..paths.len())
        .map(|index| shorten_one(&paths, index, separator))
        .collect()
}

/// Splits a leading UNC, root, or home marker off the path.
fn split_prefix(path: &str, separator: char) -> (&str, &str) {
    if let Some(rest) = path.strip_prefix(UNC_PREFIX) {
        (UNC_PREFIX, rest)
    } else if let Some(rest) = path.strip_prefix(separator) {
        (&path[..separator.len_utf8()], rest)
    } else if let Some(rest) = path.strip_prefix(HOME_PREFIX) {
        (HOME_PREFIX, rest)
    } else {
        ("", path)
    }
}

fn shorten_one(paths: &[&str], index: usize, separator: char) -> String {
    let path = paths[index];
    if path.is_empty() {
        return format!(".{separator}");
    }

    let (prefix, stripped) = split_prefix(path, separator);
    let joiner = separator.to_string();
    let segments: Vec<&str> = stripped.split(separator).collect();

    for len in 1..=segments.len() {
        for start in (0..=segments.len() - len).rev() {
            let subpath = segments[start..start + len].join(&joiner);
            let ends_path = start + len == segments.len();

            let shared = paths.iter().enumerate().any(|(other_index, other)| {
                if other_index == index || other.is_empty() || !other.contains(subpath.as_str()) {
                    return false;
                }
                if !ends_path {
                    return true;
                }
                // A trailing run only collides if it also trails the other path.
                if start > 0 && other.contains(separator) {
                    other.ends_with(&format!("{separator}{subpath}"))
                } else {
                    other.ends_with(subpath.as_str())
                }
            });

            if !shared {
                return assemble(&segments, prefix, start, len, subpath, separator);
            }
        }
    }

    stripped.to_string()
}

fn assemble(
    segments: &[&str],
    prefix: &str,
    mut start: usize,
    mut len: usize,
    mut subpath: String,
    separator: char,
) -> String {
    let mut result = String::new();

    // Keep drive letters and root markers in front of the run.
    if segments[0].ends_with(':') || !prefix.is_empty() {
        if start == 1 {
            start = 0;
            len += 1;
            subpath = format!("{}{separator}{subpath}", segments[0]);
        }
        result.push_str(prefix);
        if start > 0 {
            result.push_str(segments[0]);
            result.push(separator);
        }
    }

    if start > 0 {
        result.push(ELLIPSIS);
        result.push(separator);
    }
    result.push_str(&subpath);
    if start + len < segments.len() {
        result.push(separator);
        result.push(ELLIPSIS);
    }

    result
}
