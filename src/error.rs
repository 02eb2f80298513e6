use compact_str::CompactString;
use miette::Diagnostic;
use thiserror::Error;

use crate::Component;

/// Records all errors reported by this library.
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A purl rule was violated while parsing or constructing.
    #[error(transparent)]
    Purl(#[from] PurlError),

    /// A structurally invalid value crossed the public boundary.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// Violations of the purl grammar or of an ecosystem rule.
///
/// Every message renders lowercase and unpunctuated behind the fixed
/// `invalid purl:` marker; this rendering is part of the public contract.
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum PurlError {
    /// The input was not prefixed with the `pkg` scheme
    /// and could not be recovered as a scheme-less purl.
    #[error("invalid purl: missing required scheme component")]
    MissingScheme,

    /// The input carried a URL authority section; purls never have one.
    #[error("invalid purl: cannot contain a user:pass@host")]
    Authority,

    /// A percent-escape in the named component was malformed.
    #[error("invalid purl: malformed percent-encoding in {0}")]
    MalformedEscape(Component),

    /// A required component was absent or empty.
    #[error("invalid purl: missing required {0} component")]
    MissingComponent(Component),

    /// The named component contained a character outside its charset.
    #[error("invalid purl: {0} contains an illegal character")]
    Charset(Component),

    /// The named component began with a digit, which its grammar forbids.
    #[error("invalid purl: {0} cannot start with a number")]
    LeadingDigit(Component),

    /// A qualifier key contained a character outside `[A-Za-z0-9._-]`.
    #[error("invalid purl: qualifier key {0} contains an illegal character")]
    QualifierKeyCharset(CompactString),

    /// A qualifier key began with a digit.
    #[error("invalid purl: qualifier key {0} cannot start with a number")]
    QualifierKeyLeadingDigit(CompactString),

    /// An ecosystem-specific rule failed.
    /// The message carries the full lowercase description.
    #[error("invalid purl: {0}")]
    Ecosystem(String),
}

/// Structurally wrong inputs at the public boundary.
///
/// Unlike [`PurlError`], these are sentence-case and may wrap an
/// underlying cause. Most of the original surface for these errors is
/// unrepresentable in Rust's type system; the JSON text boundary remains.
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum ArgumentError {
    /// The provided text was not valid JSON, or did not
    /// deserialize into the component object shape.
    #[error("Unable to parse the provided JSON text as a purl object.")]
    Json(#[source] serde_json::Error),

    /// The provided JSON was valid but its top level was not an object.
    #[error("Expected a plain object of purl components.")]
    NotAnObject,
}
