use crate::PurlError;
use crate::purl::Parts;

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    // A user namespace only makes sense alongside channel qualifiers
    // and vice versa; one without the other is ambiguous.
    match (parts.namespace.is_some(), !parts.qualifiers.is_empty()) {
        (true, false) => Err(PurlError::Ecosystem(
            "conan requires qualifiers when a namespace is present".into(),
        )),
        (false, true) => Err(PurlError::Ecosystem(
            "conan requires a namespace when qualifiers are present".into(),
        )),
        _ => Ok(()),
    }
}
