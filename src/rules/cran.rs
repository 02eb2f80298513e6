use crate::purl::Parts;
use crate::{Component, PurlError};

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    if parts.version.is_none() {
        return Err(PurlError::MissingComponent(Component::Version));
    }
    Ok(())
}
