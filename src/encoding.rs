use crate::compat::{Cow, String};
use percent_encoding::{
    AsciiSet, CONTROLS, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode,
};

/// application/x-www-form-urlencoded percent-encode set
/// Everything except ASCII alphanumerics and `*`, `-`, `.`, `_`.
/// Space is in the set but is written as `+` by the encoders below.
/// Based on https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Bytes that cannot appear raw in a path: C0 controls plus the query and
/// fragment delimiters.
pub const PATH_DELIMITER_SET: &AsciiSet = &CONTROLS.add(b'?').add(b'#');

/// Encode a path so that it cannot be mistaken for a query or fragment.
/// Borrows the input when nothing needs escaping.
pub fn encode_path(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, PATH_DELIMITER_SET).into()
}

/// Encode a name or value for a query string.
/// Borrows the input when nothing needs escaping.
pub fn encode_component(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b' ', input.as_bytes()).is_none() {
        return utf8_percent_encode(input, FORM_SET).into();
    }

    let mut buffer = String::with_capacity(input.len());
    encode_component_into(&mut buffer, input);
    Cow::Owned(buffer)
}

/// Write an encoded name or value directly to buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for (i, piece) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        for chunk in utf8_percent_encode(piece, FORM_SET) {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a name or value from a query string.
///
/// `+` becomes a space and valid `%XX` escapes are decoded. Malformed escapes
/// are kept as literal text and invalid UTF-8 becomes U+FFFD, so this never fails.
pub fn decode_component(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b'+', input.as_bytes()).is_none() {
        return percent_decode_str(input).decode_utf8_lossy();
    }

    let spaced = input.replace('+', " ");
    Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}
