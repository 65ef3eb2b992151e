//! Percent-encoding of search terms.

use std::borrow::Cow;

/// Characters left literal on top of the RFC 3986 unreserved set.
const EXTRA_UNRESERVED: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes a query component.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is encoded as UTF-8
/// bytes, so a space becomes `%20` and `+` becomes `%2B`.
#[must_use]
pub fn encode_component(input: &str) -> Cow<'_, str> {
    let encoded = urlencoding::encode(input);
    if !encoded.contains('%') {
        return encoded;
    }

    let mut restored = encoded.into_owned();
    for (escaped, literal) in EXTRA_UNRESERVED {
        if restored.contains(escaped) {
            restored = restored.replace(escaped, literal);
        }
    }
    Cow::Owned(restored)
}
