//! Component-scoped percent decoding and encoding.
//!
//! Rendering starts from full percent-encoding and leaves the characters
//! that are structurally significant but legal inside a given component
//! literal: `:` in names and versions, `:` and `/` in the path-like
//! namespace and subpath. Qualifiers use form-style encoding with two
//! fixed deviations: a space is always `%20` (never `+`) and a literal
//! `+` is always `%2B`, so plus signs never read as encoded spaces.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, PercentEncode, percent_decode_str, utf8_percent_encode};

use crate::{Component, PurlError, Qualifiers};

/// Standard percent-encoding: everything outside `[A-Za-z0-9-_.!~*'()]`.
const STANDARD: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Name and version keep `:` literal.
const SEGMENT: &AsciiSet = &STANDARD.remove(b':');

/// Namespace and subpath additionally keep their `/` segment separators.
const PATH: &AsciiSet = &STANDARD.remove(b':').remove(b'/');

/// Form-style unreserved set `[A-Za-z0-9*-._]`. Percent-encoding a space
/// through this set yields `%20`, and `+` is in the set so it encodes as
/// `%2B`, which is exactly the qualifier deviation the format requires.
const QUALIFIER: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Percent-decode one raw component.
///
/// Fails with a component-scoped error when an escape is malformed
/// (`%` not followed by two hex digits, or the decoded bytes are not
/// UTF-8). Qualifiers decode form-style: a raw `+` is a space.
pub(crate) fn decode(component: Component, raw: &str) -> Result<String, PurlError> {
    match component {
        Component::Qualifiers if raw.contains('+') => {
            percent_decode(component, &raw.replace('+', " "))
        }
        _ => percent_decode(component, raw),
    }
}

fn percent_decode(component: Component, raw: &str) -> Result<String, PurlError> {
    check_escapes(component, raw)?;
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| PurlError::MalformedEscape(component))
}

// `percent_decode_str` passes malformed escapes through untouched,
// so the well-formedness scan has to happen up front.
fn check_escapes(component: Component, raw: &str) -> Result<(), PurlError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(PurlError::MalformedEscape(component));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Encode one component value for canonical rendering.
///
/// The returned value renders lazily via `Display`; nothing allocates
/// until it is written.
pub(crate) fn encode(component: Component, value: &str) -> PercentEncode<'_> {
    let set = match component {
        // The type charset is validated to need no encoding; running it
        // through the standard set keeps the contract total.
        Component::Type => STANDARD,
        Component::Name | Component::Version => SEGMENT,
        Component::Namespace | Component::Subpath => PATH,
        Component::Qualifiers => QUALIFIER,
    };
    utf8_percent_encode(value, set)
}

/// Encode a single `key=value` qualifier pair into a caller-owned
/// buffer. Encoding runs on a hot path when rendering large package
/// sets, so the buffer is reused across pairs instead of allocating
/// per pair.
pub(crate) fn encode_pair(key: &str, value: &str, out: &mut String) {
    out.extend(utf8_percent_encode(key, QUALIFIER));
    out.push('=');
    out.extend(utf8_percent_encode(value, QUALIFIER));
}

/// Render the canonical query-string form of the qualifier map.
/// Keys come out of the map already sorted; that order is part of the
/// canonical form.
pub(crate) fn encode_qualifiers(qualifiers: &Qualifiers) -> String {
    let mut out = String::new();
    for (key, value) in qualifiers.iter() {
        if !out.is_empty() {
            out.push('&');
        }
        encode_pair(key, value, &mut out);
    }
    out
}
