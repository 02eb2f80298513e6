use lazy_regex::regex_is_match;

use crate::PurlError;
use crate::purl::Parts;

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    let Some(tag_id) = parts.qualifiers.get("tag_id") else {
        return Err(PurlError::Ecosystem("swid requires a tag_id qualifier".into()));
    };
    let tag_id = tag_id.trim();
    if tag_id.is_empty() {
        return Err(PurlError::Ecosystem(
            "swid tag_id qualifier cannot be empty".into(),
        ));
    }
    // GUID tag ids are case-insensitive identifiers; the canonical form
    // is lowercase. Non-GUID tag ids are opaque.
    if regex_is_match!(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
        tag_id
    ) && tag_id.chars().any(|c| c.is_ascii_uppercase())
    {
        return Err(PurlError::Ecosystem(
            "swid tag_id qualifier must be lowercase when it is a guid".into(),
        ));
    }
    Ok(())
}
