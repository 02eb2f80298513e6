use assert_matches::assert_matches;
use maplit::btreemap;
use packageurl::*;
use pretty_assertions::assert_eq;

#[test]
fn object_form_is_sparse() {
    let purl = PackageUrl::parse("pkg:cargo/serde@1.0.219").unwrap();
    let object = purl.to_object();
    assert_eq!(object.package_type, "cargo");
    assert_eq!(object.name, "serde");
    assert_eq!(object.version.as_deref(), Some("1.0.219"));
    assert_eq!(object.namespace, None);
    assert_eq!(object.qualifiers, None);
    assert_eq!(object.subpath, None);
}

#[test]
fn object_round_trip_canonicalizes() {
    let object = PurlObject {
        package_type: "PyPI".to_string(),
        name: "Typing_Extensions".to_string(),
        version: Some("4.7.1".to_string()),
        ..Default::default()
    };
    let purl = PackageUrl::try_from(object).unwrap();
    assert_eq!(purl.to_string(), "pkg:pypi/typing-extensions@4.7.1");
}

#[test]
fn json_text_round_trip() {
    let purl =
        PackageUrl::parse("pkg:deb/debian/dpkg@1.19.0.4?arch=amd64&distro=stretch#usr/bin")
            .unwrap();
    let text = purl.to_json();
    assert_eq!(
        text,
        concat!(
            r#"{"type":"deb","namespace":"debian","name":"dpkg","version":"1.19.0.4","#,
            r#""qualifiers":{"arch":"amd64","distro":"stretch"},"subpath":"usr/bin"}"#,
        )
    );
    let rebuilt = PackageUrl::from_json(&text).unwrap();
    assert_eq!(purl, rebuilt);
}

#[test]
fn from_json_accepts_sparse_objects() {
    let rebuilt = PackageUrl::from_json(r#"{"type":"npm","name":"lodash"}"#).unwrap();
    assert_eq!(rebuilt.to_string(), "pkg:npm/lodash");
}

#[test]
fn from_json_rejects_malformed_text() {
    assert_matches!(
        PackageUrl::from_json("{not json"),
        Err(Error::Argument(ArgumentError::Json(_)))
    );
}

#[test]
fn from_json_rejects_non_objects() {
    assert_matches!(
        PackageUrl::from_json("42"),
        Err(Error::Argument(ArgumentError::NotAnObject))
    );
    assert_matches!(
        PackageUrl::from_json(r#""pkg:npm/lodash""#),
        Err(Error::Argument(ArgumentError::NotAnObject))
    );
}

#[test]
fn from_json_applies_purl_rules() {
    assert_matches!(
        PackageUrl::from_json(r#"{"type":"swift","name":"Alamofire"}"#),
        Err(Error::Purl(PurlError::MissingComponent(_)))
    );
}

#[test]
fn object_qualifiers_are_plain_maps() {
    let purl = PackageUrl::builder()
        .package_type("rpm")
        .namespace("fedora")
        .name("curl")
        .version("7.50.3-1.fc25")
        .qualifiers(Qualifiers::from_iter([("arch", "i386"), ("distro", "fedora-25")]))
        .build()
        .unwrap();
    let object = purl.to_object();
    assert_eq!(
        object.qualifiers,
        Some(btreemap! {
            "arch".to_string() => "i386".to_string(),
            "distro".to_string() => "fedora-25".to_string(),
        })
    );
}

#[test]
fn serde_deserializes_canonical_strings() {
    let listed: Vec<PackageUrl> = serde_json::from_str(
        r#"["pkg:npm/lodash@4.17.21", "pkg:cargo/serde@1.0.219"]"#,
    )
    .unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name(), "lodash");
    assert_eq!(listed[1].ecosystem(), Some(Ecosystem::Cargo));
}
