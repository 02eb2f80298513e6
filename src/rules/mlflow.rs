use crate::PurlError;
use crate::purl::Parts;
use crate::rules::fold_lower;

/// Marker identifying repositories whose model names are
/// case-insensitive.
const CASELESS_HOST_MARKER: &str = "azuredatabricks";

pub(crate) fn normalize(parts: &mut Parts) {
    let caseless = parts
        .qualifiers
        .get("repository_url")
        .is_some_and(|url| url.to_lowercase().contains(CASELESS_HOST_MARKER));
    if caseless {
        fold_lower(&mut parts.name);
    }
}

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    if parts.namespace.is_some() {
        return Err(PurlError::Ecosystem("mlflow namespace must be empty".into()));
    }
    Ok(())
}
