//! Percent-escaping of free-text record fields.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left untouched when escaping a path segment.
///
/// Besides the unreserved set, sub-delimiters that are legal inside a single
/// path segment pass through; `/`, `;`, `,` and `?` do not.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Escape `value` so it can be placed inside a URL path segment.
pub fn path_escape(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
