use compact_str::{CompactString, ToCompactString};
use derive_more::Display;
use lazy_regex::regex_is_match;

use crate::{PurlError, Qualifiers};

/// The six components of a purl, in canonical order.
///
/// Used to scope errors and codec behavior to the component being
/// processed; the names render in error messages.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{}", self.name())]
pub enum Component {
    /// The ecosystem tag, e.g. `npm` in `pkg:npm/lodash`.
    Type,
    /// The namespace, e.g. `org.apache.xmlgraphics` in a maven purl.
    Namespace,
    /// The package name.
    Name,
    /// The version.
    Version,
    /// The `key=value` metadata pairs after `?`.
    Qualifiers,
    /// The path inside the package after `#`.
    Subpath,
}

impl Component {
    /// The component name as it appears in canonical error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Component::Type => "type",
            Component::Namespace => "namespace",
            Component::Name => "name",
            Component::Version => "version",
            Component::Qualifiers => "qualifiers",
            Component::Subpath => "subpath",
        }
    }
}

/// Trim and lowercase the type tag.
pub(crate) fn normalize_type(raw: &str) -> CompactString {
    let trimmed = raw.trim();
    if trimmed.chars().any(|c| c.is_ascii_uppercase()) {
        trimmed.to_lowercase().to_compact_string()
    } else {
        trimmed.to_compact_string()
    }
}

/// The type is required, limited to `[A-Za-z0-9.-]`, and must not
/// start with a digit.
pub(crate) fn validate_type(ty: &str) -> Result<(), PurlError> {
    if ty.is_empty() {
        return Err(PurlError::MissingComponent(Component::Type));
    }
    if !regex_is_match!(r"^[a-zA-Z0-9.-]+$", ty) {
        return Err(PurlError::Charset(Component::Type));
    }
    if ty.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(PurlError::LeadingDigit(Component::Type));
    }
    Ok(())
}

/// Trim the name; emptiness is caught by [`validate_name`].
pub(crate) fn normalize_name(raw: &str) -> CompactString {
    raw.trim().to_compact_string()
}

/// The name is required.
pub(crate) fn validate_name(name: &str) -> Result<(), PurlError> {
    if name.is_empty() {
        return Err(PurlError::MissingComponent(Component::Name));
    }
    Ok(())
}

/// Purl path normalization for the namespace: strip leading and
/// trailing `/`, collapse runs of `/`, drop empty segments.
/// Produces absent when nothing remains.
pub(crate) fn normalize_namespace(raw: &str) -> Option<CompactString> {
    normalize_path(raw, false)
}

/// Purl path normalization for the subpath: as the namespace, but
/// additionally dropping `.`, `..`, and whitespace-only segments.
pub(crate) fn normalize_subpath(raw: &str) -> Option<CompactString> {
    normalize_path(raw, true)
}

fn normalize_path(raw: &str, drop_dot_segments: bool) -> Option<CompactString> {
    let mut rebuilt = CompactString::default();
    for segment in raw.split('/') {
        if segment.is_empty() {
            continue;
        }
        if drop_dot_segments
            && (segment == "." || segment == ".." || segment.trim().is_empty())
        {
            continue;
        }
        if !rebuilt.is_empty() {
            rebuilt.push('/');
        }
        rebuilt.push_str(segment);
    }
    (!rebuilt.is_empty()).then_some(rebuilt)
}

/// Trim the version; absent when empty.
pub(crate) fn normalize_version(raw: &str) -> Option<CompactString> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_compact_string())
}

/// Collapse raw qualifier pairs into the canonical map.
///
/// Values are trimmed and entries whose trimmed value is empty are
/// dropped; keys are trimmed and lowercased; a later duplicate key
/// overwrites an earlier one. The raw parser deliberately preserves
/// duplicates so that this last-wins collapse happens in exactly one
/// place.
pub(crate) fn normalize_qualifiers(
    pairs: impl IntoIterator<Item = (CompactString, CompactString)>,
) -> Qualifiers {
    let mut out = Qualifiers::new();
    for (key, value) in pairs {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let key = key.trim();
        let key = if key.chars().any(|c| c.is_ascii_uppercase()) {
            key.to_lowercase().to_compact_string()
        } else {
            key.to_compact_string()
        };
        out.insert(key, value);
    }
    out
}

/// Each qualifier key must match `[A-Za-z0-9._-]` with no leading digit.
pub(crate) fn validate_qualifiers(qualifiers: &Qualifiers) -> Result<(), PurlError> {
    for (key, _) in qualifiers.iter() {
        if !regex_is_match!(r"^[a-zA-Z0-9._-]+$", key) {
            return Err(PurlError::QualifierKeyCharset(key.to_compact_string()));
        }
        if key.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(PurlError::QualifierKeyLeadingDigit(key.to_compact_string()));
        }
    }
    Ok(())
}
