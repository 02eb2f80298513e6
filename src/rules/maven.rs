use crate::purl::Parts;
use crate::{Component, PurlError};

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    // The groupId is not optional for maven coordinates.
    if parts.namespace.is_none() {
        return Err(PurlError::MissingComponent(Component::Namespace));
    }
    Ok(())
}
