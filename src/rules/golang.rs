use crate::PurlError;
use crate::purl::Parts;

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    // Module versions with a `v` prefix must carry valid semver after it;
    // versions without the prefix are opaque (pseudo-revisions, commits).
    if let Some(version) = parts.version.as_deref() {
        if let Some(stripped) = version.strip_prefix('v') {
            if semver::Version::parse(stripped).is_err() {
                return Err(PurlError::Ecosystem(
                    "golang version must be valid semver when prefixed with v".into(),
                ));
            }
        }
    }
    Ok(())
}
