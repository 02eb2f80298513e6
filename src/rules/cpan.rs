use crate::PurlError;
use crate::purl::Parts;

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    // CPAN author IDs are always uppercase.
    if let Some(namespace) = parts.namespace.as_deref() {
        if namespace.chars().any(|c| c.is_lowercase()) {
            return Err(PurlError::Ecosystem("cpan namespace must be uppercase".into()));
        }
    }
    Ok(())
}
