use std::str::FromStr;

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::purl::Parts;
use crate::rules;

/// Identifies the package ecosystems with registered rules.
///
/// The `type` component of a purl selects at most one entry from this
/// closed table; the entry may rewrite any other component during its
/// normalize step and may read any other component during validation.
/// A tag that misses the table is not an error: unrecognized ecosystems
/// are accepted with only the generic component rules applied.
///
/// Simple case folding is declared per variant; everything beyond
/// folding lives in the matching [`rules`] module.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
    Assoc,
)]
#[non_exhaustive]
#[serde(rename_all = "lowercase")]
#[func(const fn folds_namespace(&self) -> bool { false })]
#[func(const fn folds_name(&self) -> bool { false })]
#[func(const fn folds_version(&self) -> bool { false })]
pub enum Ecosystem {
    /// Arch Linux packages.
    #[strum(serialize = "alpm")]
    #[assoc(folds_namespace = true, folds_name = true)]
    Alpm,

    /// Alpine Linux packages.
    #[strum(serialize = "apk")]
    #[assoc(folds_namespace = true, folds_name = true)]
    Apk,

    /// Bitbucket repositories.
    #[strum(serialize = "bitbucket")]
    #[assoc(folds_namespace = true, folds_name = true)]
    Bitbucket,

    /// Interacts with Cargo.
    #[strum(serialize = "cargo")]
    Cargo,

    /// Interacts with CocoaPods.
    #[strum(serialize = "cocoapods")]
    Cocoapods,

    /// Interacts with Composer.
    #[strum(serialize = "composer")]
    #[assoc(folds_namespace = true, folds_name = true)]
    Composer,

    /// Interacts with Conan.
    #[strum(serialize = "conan")]
    Conan,

    /// Interacts with CPAN.
    #[strum(serialize = "cpan")]
    Cpan,

    /// Interacts with CRAN.
    #[strum(serialize = "cran")]
    Cran,

    /// Debian packages.
    #[strum(serialize = "deb")]
    #[assoc(folds_namespace = true, folds_name = true)]
    Deb,

    /// Interacts with RubyGems.
    #[strum(serialize = "gem")]
    Gem,

    /// Packages with no particular ecosystem.
    #[strum(serialize = "generic")]
    Generic,

    /// GitHub repositories.
    #[strum(serialize = "github")]
    #[assoc(folds_namespace = true, folds_name = true)]
    Github,

    /// GitLab repositories.
    #[strum(serialize = "gitlab")]
    #[assoc(folds_namespace = true, folds_name = true)]
    Gitlab,

    /// Go modules.
    #[strum(serialize = "golang")]
    Golang,

    /// Interacts with Hackage.
    #[strum(serialize = "hackage")]
    Hackage,

    /// Interacts with Hex.
    #[strum(serialize = "hex")]
    #[assoc(folds_namespace = true, folds_name = true)]
    Hex,

    /// Hugging Face models.
    #[strum(serialize = "huggingface")]
    #[assoc(folds_version = true)]
    Huggingface,

    /// Interacts with LuaRocks.
    #[strum(serialize = "luarocks")]
    #[assoc(folds_version = true)]
    Luarocks,

    /// Interacts with Maven.
    #[strum(serialize = "maven")]
    Maven,

    /// MLflow models.
    #[strum(serialize = "mlflow")]
    Mlflow,

    /// Interacts with NPM.
    #[strum(serialize = "npm")]
    #[assoc(folds_namespace = true)]
    Npm,

    /// Interacts with NuGet.
    #[strum(serialize = "nuget")]
    Nuget,

    /// OCI container images.
    #[strum(serialize = "oci")]
    #[assoc(folds_name = true)]
    Oci,

    /// Interacts with Dart's package manager.
    #[strum(serialize = "pub")]
    #[assoc(folds_name = true)]
    Pub,

    /// Interacts with PyPI.
    #[strum(serialize = "pypi")]
    #[assoc(folds_namespace = true, folds_name = true)]
    Pypi,

    /// QNAP packages.
    #[strum(serialize = "qpkg")]
    #[assoc(folds_namespace = true)]
    Qpkg,

    /// RPM packages.
    #[strum(serialize = "rpm")]
    #[assoc(folds_namespace = true)]
    Rpm,

    /// SWID tags.
    #[strum(serialize = "swid")]
    Swid,

    /// Interacts with Swift's package manager.
    #[strum(serialize = "swift")]
    Swift,
}

impl Ecosystem {
    /// Look up the registry entry for a canonical (lowercase) type tag.
    ///
    /// Returns `None` for tags with no registered rules.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::from_str(tag).ok()
    }

    /// Apply this ecosystem's normalization to the assembled components.
    ///
    /// Case folding declared on the variant runs first, then any
    /// module-specific rewriting.
    pub(crate) fn normalize(&self, parts: &mut Parts) {
        if self.folds_namespace() {
            if let Some(namespace) = parts.namespace.as_mut() {
                rules::fold_lower(namespace);
            }
        }
        if self.folds_name() {
            rules::fold_lower(&mut parts.name);
        }
        if self.folds_version() {
            if let Some(version) = parts.version.as_mut() {
                rules::fold_lower(version);
            }
        }
        match self {
            Self::Npm => rules::npm::normalize(parts),
            Self::Pypi => rules::pypi::normalize(parts),
            Self::Pub => rules::dart_pub::normalize(parts),
            Self::Mlflow => rules::mlflow::normalize(parts),
            _ => {}
        }
    }

    /// Apply this ecosystem's validation to the normalized components.
    pub(crate) fn validate(&self, parts: &Parts) -> Result<(), crate::PurlError> {
        match self {
            Self::Npm => rules::npm::validate(parts),
            Self::Maven => rules::maven::validate(parts),
            Self::Golang => rules::golang::validate(parts),
            Self::Pub => rules::dart_pub::validate(parts),
            Self::Cocoapods => rules::cocoapods::validate(parts),
            Self::Cpan => rules::cpan::validate(parts),
            Self::Conan => rules::conan::validate(parts),
            Self::Mlflow => rules::mlflow::validate(parts),
            Self::Oci => rules::oci::validate(parts),
            Self::Swid => rules::swid::validate(parts),
            Self::Swift => rules::swift::validate(parts),
            Self::Cran => rules::cran::validate(parts),
            _ => Ok(()),
        }
    }
}
