use crate::PurlError;
use crate::purl::Parts;
use crate::reserved;
use crate::rules::fold_lower;

/// Names npm refuses regardless of age.
const BLOCKED: &[&str] = &["node_modules", "favicon.ico"];

/// Characters forbidden in modern and legacy names alike.
const SPECIAL: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// Combined namespace + name limit for names subject to the modern rules.
const MAX_MODERN_LEN: usize = 214;

pub(crate) fn normalize(parts: &mut Parts) {
    // Namespace folding is declared on the variant; the name keeps its
    // original case only when the package predates the modern rules.
    if !reserved::legacy_names().contains(parts.name.as_str()) {
        fold_lower(&mut parts.name);
    }
}

pub(crate) fn validate(parts: &Parts) -> Result<(), PurlError> {
    let name = parts.name.as_str();

    if let Some(namespace) = parts.namespace.as_deref() {
        if !namespace.starts_with('@') {
            return Err(PurlError::Ecosystem(
                "npm namespace must start with @".into(),
            ));
        }
    }
    if name != name.trim() {
        return Err(PurlError::Ecosystem(
            "npm name cannot contain leading or trailing spaces".into(),
        ));
    }
    if name.starts_with('.') || name.starts_with('_') {
        return Err(PurlError::Ecosystem(
            "npm name cannot start with a period or underscore".into(),
        ));
    }
    if name.contains(SPECIAL) {
        return Err(PurlError::Ecosystem(
            "npm name cannot contain the special characters ~'!()*".into(),
        ));
    }

    let lowered = name.to_lowercase();
    if BLOCKED.contains(&lowered.as_str()) {
        return Err(PurlError::Ecosystem(format!("npm name {lowered} is reserved")));
    }

    // Legacy names predate both the length limit and the core-module
    // collision rule; some of them are themselves old core modules.
    if !reserved::legacy_names().contains(name) {
        if reserved::builtin_modules().contains(lowered.as_str()) {
            return Err(PurlError::Ecosystem(format!(
                "npm name {lowered} is a builtin module name"
            )));
        }
        let combined =
            parts.namespace.as_deref().map_or(0, |ns| ns.len() + 1) + name.len();
        if combined > MAX_MODERN_LEN {
            return Err(PurlError::Ecosystem(
                "npm namespace and name cannot exceed 214 characters".into(),
            ));
        }
    }

    Ok(())
}
