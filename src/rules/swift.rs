use crate::purl::Parts;
use crate::{Component, PurlError};

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    // Swift packages are only addressable with both their source host
    // namespace and an exact version.
    if parts.namespace.is_none() {
        return Err(PurlError::MissingComponent(Component::Namespace));
    }
    if parts.version.is_none() {
        return Err(PurlError::MissingComponent(Component::Version));
    }
    Ok(())
}
