use crate::PurlError;
use crate::purl::Parts;

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    // Registries belong in the repository_url qualifier, never in
    // the namespace.
    if parts.namespace.is_some() {
        return Err(PurlError::Ecosystem("oci namespace must be empty".into()));
    }
    Ok(())
}
