use crate::purl::Parts;

pub(crate) fn normalize(parts: &mut Parts) {
    // Case folding is declared on the variant; pypi treats underscores
    // and dashes in names as equivalent, canonicalizing to dashes.
    if parts.name.contains('_') {
        parts.name = parts.name.replace('_', "-").into();
    }
}
