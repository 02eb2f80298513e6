use crate::PurlError;
use crate::purl::Parts;

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    let name = parts.name.as_str();
    if name.chars().any(char::is_whitespace) {
        return Err(PurlError::Ecosystem(
            "cocoapods name cannot contain whitespace".into(),
        ));
    }
    if name.contains('+') {
        return Err(PurlError::Ecosystem(
            "cocoapods name cannot contain a plus character".into(),
        ));
    }
    if name.starts_with('.') {
        return Err(PurlError::Ecosystem(
            "cocoapods name cannot start with a period".into(),
        ));
    }
    Ok(())
}
