use crate::PurlError;
use crate::purl::Parts;

pub(crate) fn normalize(parts: &mut Parts) {
    // Pub treats dashes and underscores as equivalent, canonicalizing
    // to underscores; case folding is declared on the variant.
    if parts.name.contains('-') {
        parts.name = parts.name.replace('-', "_").into();
    }
}

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    let valid = parts
        .name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !valid {
        return Err(PurlError::Ecosystem(
            "pub name may contain only lowercase letters digits and underscores".into(),
        ));
    }
    Ok(())
}
