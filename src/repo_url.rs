//! Conversion of purls to repository and download URLs for well-known
//! hosts.
//!
//! These are static lookup tables over the registered ecosystems;
//! nothing here touches the network. Ecosystems without a well-known
//! host, and purls missing the components a host URL needs, yield
//! `None`.

use crate::{Ecosystem, PackageUrl};

/// The browsable repository page for a purl on its well-known host.
///
/// ```
/// # use packageurl::{PackageUrl, repository_url};
/// let purl = PackageUrl::parse("pkg:cargo/serde@1.0.219").unwrap();
/// assert_eq!(
///     repository_url(&purl).as_deref(),
///     Some("https://crates.io/crates/serde"),
/// );
/// ```
pub fn repository_url(purl: &PackageUrl) -> Option<String> {
    let name = purl.name();
    let namespace = purl.namespace();
    Some(match purl.ecosystem()? {
        Ecosystem::Bitbucket => format!("https://bitbucket.org/{}/{name}", namespace?),
        Ecosystem::Cargo => format!("https://crates.io/crates/{name}"),
        Ecosystem::Composer => format!("https://packagist.org/packages/{}/{name}", namespace?),
        Ecosystem::Gem => format!("https://rubygems.org/gems/{name}"),
        Ecosystem::Github => format!("https://github.com/{}/{name}", namespace?),
        Ecosystem::Gitlab => format!("https://gitlab.com/{}/{name}", namespace?),
        Ecosystem::Golang => match namespace {
            Some(namespace) => format!("https://pkg.go.dev/{namespace}/{name}"),
            None => format!("https://pkg.go.dev/{name}"),
        },
        Ecosystem::Hackage => format!("https://hackage.haskell.org/package/{name}"),
        Ecosystem::Hex => format!("https://hex.pm/packages/{name}"),
        Ecosystem::Npm => match namespace {
            Some(namespace) => format!("https://www.npmjs.com/package/{namespace}/{name}"),
            None => format!("https://www.npmjs.com/package/{name}"),
        },
        Ecosystem::Nuget => format!("https://www.nuget.org/packages/{name}"),
        Ecosystem::Pub => format!("https://pub.dev/packages/{name}"),
        Ecosystem::Pypi => format!("https://pypi.org/project/{name}/"),
        _ => return None,
    })
}

/// The direct artifact download URL for a purl, when its host exposes
/// a stable one. Requires a version.
pub fn download_url(purl: &PackageUrl) -> Option<String> {
    let name = purl.name();
    let version = purl.version()?;
    Some(match purl.ecosystem()? {
        Ecosystem::Cargo => {
            format!("https://crates.io/api/v1/crates/{name}/{version}/download")
        }
        Ecosystem::Gem => format!("https://rubygems.org/downloads/{name}-{version}.gem"),
        Ecosystem::Hex => format!("https://repo.hex.pm/tarballs/{name}-{version}.tar"),
        Ecosystem::Npm => match purl.namespace() {
            Some(namespace) => {
                format!("https://registry.npmjs.org/{namespace}/{name}/-/{name}-{version}.tgz")
            }
            None => format!("https://registry.npmjs.org/{name}/-/{name}-{version}.tgz"),
        },
        Ecosystem::Nuget => format!("https://www.nuget.org/api/v2/package/{name}/{version}"),
        _ => return None,
    })
}
