use assert_matches::assert_matches;
use itertools::izip;
use packageurl::*;
use simple_test_case::test_case;

fn build(
    package_type: &str,
    namespace: Option<&str>,
    name: &str,
    version: Option<&str>,
) -> Result<PackageUrl, Error> {
    PackageUrl::builder()
        .package_type(package_type)
        .maybe_namespace(namespace)
        .name(name)
        .maybe_version(version)
        .build()
}

#[test]
fn maven_requires_namespace() {
    assert_matches!(
        build("maven", None, "commons-lang3", Some("3.12.0")),
        Err(Error::Purl(PurlError::MissingComponent(Component::Namespace)))
    );
    assert!(build("maven", Some("org.apache.commons"), "commons-lang3", Some("3.12.0")).is_ok());
}

#[test_case(Some("v1.2.3"), true; "plain_semver")]
#[test_case(Some("v0.0.0-20210101000000-abcdef012345"), true; "pseudo_version")]
#[test_case(Some("vnotsemver"), false; "not_semver")]
#[test_case(Some("v1.2"), false; "incomplete_semver")]
#[test_case(Some("234fd47e07d1004f0aed9c"), true; "opaque_commit")]
#[test_case(None, true; "versionless")]
#[test]
fn golang_version_rule(version: Option<&str>, ok: bool) {
    let result = build("golang", Some("github.com/gorilla"), "mux", version);
    assert_eq!(result.is_ok(), ok, "version {version:?}");
}

#[test_case("node_modules"; "blocked_directory")]
#[test_case("favicon.ico"; "blocked_file")]
#[test_case("fs"; "builtin_module")]
#[test_case("http"; "another_builtin")]
#[test_case(".hidden"; "leading_period")]
#[test_case("_private"; "leading_underscore")]
#[test_case("bang!"; "special_character")]
#[test]
fn npm_rejects(name: &str) {
    assert_matches!(build("npm", None, name, None), Err(Error::Purl(_)));
}

#[test]
fn npm_legacy_names_keep_case() {
    let legacy = build("npm", None, "JSONStream", None).unwrap();
    assert_eq!(legacy.name(), "JSONStream");

    let modern = build("npm", None, "Express", None).unwrap();
    assert_eq!(modern.name(), "express");
}

#[test]
fn npm_namespace_shape() {
    assert_matches!(
        build("npm", Some("babel"), "core", None),
        Err(Error::Purl(PurlError::Ecosystem(_)))
    );
    let scoped = build("npm", Some("@Babel"), "core", None).unwrap();
    assert_eq!(scoped.namespace(), Some("@babel"));
}

#[test]
fn npm_modern_length_limit() {
    let long = "a".repeat(210);
    assert_matches!(
        build("npm", Some("@scope"), &long, None),
        Err(Error::Purl(PurlError::Ecosystem(_)))
    );
    assert!(build("npm", None, &long, None).is_ok());
}

#[test]
fn pypi_folds_underscores() {
    let purl = build("pypi", None, "Typing_Extensions", Some("4.7.1")).unwrap();
    assert_eq!(purl.name(), "typing-extensions");
}

#[test]
fn pub_folds_dashes_and_restricts_charset() {
    let purl = build("pub", None, "Build-Runner", None).unwrap();
    assert_eq!(purl.name(), "build_runner");
    assert_matches!(
        build("pub", None, "has.dot", None),
        Err(Error::Purl(PurlError::Ecosystem(_)))
    );
}

#[test_case("Maps Indoors"; "whitespace")]
#[test_case("Maps+Indoors"; "plus")]
#[test_case(".MapsIndoors"; "leading_period")]
#[test]
fn cocoapods_rejects(name: &str) {
    assert_matches!(
        build("cocoapods", None, name, None),
        Err(Error::Purl(PurlError::Ecosystem(_)))
    );
}

#[test]
fn cpan_namespace_must_be_uppercase() {
    assert!(build("cpan", Some("CTDEAN"), "Tk-Tree", Some("0.02")).is_ok());
    assert_matches!(
        build("cpan", Some("ctdean"), "Tk-Tree", Some("0.02")),
        Err(Error::Purl(PurlError::Ecosystem(_)))
    );
    assert!(build("cpan", None, "Convert-ASCIINames", Some("1.002")).is_ok());
}

#[test]
fn conan_namespace_and_qualifiers_are_co_required() {
    assert!(build("conan", None, "openssl", Some("3.0.3")).is_ok());
    assert_matches!(
        build("conan", Some("bincrafters"), "openssl", Some("3.0.3")),
        Err(Error::Purl(PurlError::Ecosystem(_)))
    );
    let with_channel = PackageUrl::builder()
        .package_type("conan")
        .namespace("bincrafters")
        .name("openssl")
        .version("3.0.3")
        .qualifiers(Qualifiers::from_iter([("channel", "stable")]))
        .build();
    assert!(with_channel.is_ok());
    let channel_only = PackageUrl::builder()
        .package_type("conan")
        .name("openssl")
        .qualifiers(Qualifiers::from_iter([("channel", "stable")]))
        .build();
    assert_matches!(channel_only, Err(Error::Purl(PurlError::Ecosystem(_))));
}

#[test]
fn mlflow_namespace_must_be_empty() {
    assert_matches!(
        build("mlflow", Some("models"), "CreditFraud", None),
        Err(Error::Purl(PurlError::Ecosystem(_)))
    );
}

#[test]
fn mlflow_name_case_depends_on_repository() {
    let databricks = PackageUrl::builder()
        .package_type("mlflow")
        .name("CreditFraud")
        .qualifiers(Qualifiers::from_iter([(
            "repository_url",
            "https://adb-123.azuredatabricks.net/api/2.0/mlflow",
        )]))
        .build()
        .unwrap();
    assert_eq!(databricks.name(), "creditfraud");

    let generic_host = PackageUrl::builder()
        .package_type("mlflow")
        .name("CreditFraud")
        .qualifiers(Qualifiers::from_iter([(
            "repository_url",
            "https://my-mlflow.example.com",
        )]))
        .build()
        .unwrap();
    assert_eq!(generic_host.name(), "CreditFraud");
}

#[test]
fn oci_rules() {
    assert_matches!(
        build("oci", Some("library"), "debian", None),
        Err(Error::Purl(PurlError::Ecosystem(_)))
    );
    let folded = build("oci", None, "Debian", None).unwrap();
    assert_eq!(folded.name(), "debian");
}

#[test]
fn swid_requires_tag_id() {
    assert_matches!(
        build("swid", Some("Acme"), "Enterprise Server", Some("1.0.0")),
        Err(Error::Purl(PurlError::Ecosystem(_)))
    );

    let tagged = PackageUrl::builder()
        .package_type("swid")
        .namespace("Acme")
        .name("Enterprise Server")
        .version("1.0.0")
        .qualifiers(Qualifiers::from_iter([(
            "tag_id",
            "75b8c285-fa7b-485b-b199-4745e3004d0d",
        )]))
        .build();
    assert!(tagged.is_ok());

    let upper_guid = PackageUrl::builder()
        .package_type("swid")
        .name("Enterprise Server")
        .qualifiers(Qualifiers::from_iter([(
            "tag_id",
            "75B8C285-FA7B-485B-B199-4745E3004D0D",
        )]))
        .build();
    assert_matches!(upper_guid, Err(Error::Purl(PurlError::Ecosystem(_))));
}

#[test]
fn swift_requires_namespace_and_version() {
    assert_matches!(
        build("swift", None, "Alamofire", Some("5.4.3")),
        Err(Error::Purl(PurlError::MissingComponent(Component::Namespace)))
    );
    assert_matches!(
        build("swift", Some("github.com/Alamofire"), "Alamofire", None),
        Err(Error::Purl(PurlError::MissingComponent(Component::Version)))
    );
    assert!(build("swift", Some("github.com/Alamofire"), "Alamofire", Some("5.4.3")).is_ok());
}

#[test]
fn cran_requires_version() {
    assert_matches!(
        build("cran", None, "caret", None),
        Err(Error::Purl(PurlError::MissingComponent(Component::Version)))
    );
    assert!(build("cran", None, "caret", Some("6.0-88")).is_ok());
}

#[test]
fn luarocks_folds_version() {
    let purl = build("luarocks", None, "luasocket", Some("3.0RC1-2")).unwrap();
    assert_eq!(purl.version(), Some("3.0rc1-2"));
}

#[test]
fn folding_ecosystems_lowercase_namespace_and_name() {
    let types = ["alpm", "apk", "bitbucket", "composer", "deb", "github", "gitlab", "hex"];
    let results = types
        .iter()
        .map(|ty| build(ty, Some("Upper"), "MixedCase", None).unwrap())
        .collect::<Vec<_>>();
    for (ty, purl) in izip!(types, results) {
        assert_eq!(purl.namespace(), Some("upper"), "{ty} namespace");
        assert_eq!(purl.name(), "mixedcase", "{ty} name");
    }
}

#[test]
fn qpkg_and_rpm_fold_namespace_only() {
    for ty in ["qpkg", "rpm"] {
        let purl = build(ty, Some("Fedora"), "Curl", Some("7.50.3-1.fc25")).unwrap();
        assert_eq!(purl.namespace(), Some("fedora"), "{ty} namespace");
        assert_eq!(purl.name(), "Curl", "{ty} name untouched");
    }
}
