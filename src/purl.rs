use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;

use bon::bon;
use compact_str::CompactString;
use documented::Documented;
use duplicate::duplicate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::trace;
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{ObjectBuilder, Type},
};

use crate::parse::Components;
use crate::{ArgumentError, Component, Ecosystem, Error, Qualifiers, codec, component};

/// The components of a purl other than the type, after normalization.
///
/// This is the mutable scratch the constructor pipeline works on;
/// ecosystem rules rewrite and inspect it. Ownership never escapes the
/// constructor, so the assembled [`PackageUrl`] is immutable without
/// any runtime freezing.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Parts {
    pub(crate) namespace: Option<CompactString>,
    pub(crate) name: CompactString,
    pub(crate) version: Option<CompactString>,
    pub(crate) qualifiers: Qualifiers,
    pub(crate) subpath: Option<CompactString>,
}

/// A validated, canonical package URL.
///
/// A purl identifies a software package across ecosystems in the form
/// `pkg:<type>/<namespace>/<name>@<version>?<qualifiers>#<subpath>`.
///
/// ## Guarantees
///
/// An instance only exists if every present component passed the
/// generic component rules and the rules of its ecosystem (when the
/// type tag is a registered [`Ecosystem`]). Construction fails
/// atomically; there are no setters and no partially-valid state.
///
/// ## Canonical form
///
/// [`Display`](std::fmt::Display) renders the canonical string:
/// components percent-encoded per their own rules, qualifier keys in
/// sorted order, spaces in qualifier values as `%20` and literal plus
/// signs as `%2B`. [`PackageUrl::parse`] and rendering are mutual
/// inverses up to this canonical form.
///
/// ## Ordering
///
/// Orders by type, then namespace, then name and version compared
/// alphanumerically, then qualifiers and subpath. Missing components
/// sort first.
///
/// ## Construction
///
/// ```
/// # use packageurl::PackageUrl;
/// let purl = PackageUrl::builder()
///     .package_type("npm")
///     .namespace("@babel")
///     .name("core")
///     .version("7.20.0")
///     .build()
///     .unwrap();
/// assert_eq!(purl.to_string(), "pkg:npm/%40babel/core@7.20.0");
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug, Documented)]
pub struct PackageUrl {
    ty: CompactString,
    parts: Parts,
}

impl PackageUrl {
    /// Parse a purl string into a validated instance.
    ///
    /// ```
    /// # use packageurl::PackageUrl;
    /// let purl = PackageUrl::parse("pkg:cargo/serde@1.0.219").unwrap();
    /// assert_eq!(purl.name(), "serde");
    /// ```
    pub fn parse(input: impl AsRef<str>) -> Result<Self, Error> {
        Self::from_components(Components::parse(input.as_ref())?)
    }

    /// Assemble from raw tokenized components.
    pub(crate) fn from_components(components: Components) -> Result<Self, Error> {
        let Components {
            package_type,
            namespace,
            name,
            version,
            qualifiers,
            subpath,
        } = components;
        Self::construct(
            package_type.unwrap_or_default(),
            namespace,
            name.unwrap_or_default(),
            version,
            qualifiers.unwrap_or_default(),
            subpath,
        )
    }

    /// The full pipeline: generic normalize and validate per component,
    /// then the ecosystem entry's normalize and validate over the whole.
    fn construct(
        raw_type: CompactString,
        raw_namespace: Option<CompactString>,
        raw_name: CompactString,
        raw_version: Option<CompactString>,
        raw_qualifiers: impl IntoIterator<Item = (CompactString, CompactString)>,
        raw_subpath: Option<CompactString>,
    ) -> Result<Self, Error> {
        let ty = component::normalize_type(&raw_type);
        component::validate_type(&ty)?;

        let name = component::normalize_name(&raw_name);
        component::validate_name(&name)?;

        let namespace = raw_namespace
            .as_deref()
            .and_then(component::normalize_namespace);
        let version = raw_version.as_deref().and_then(component::normalize_version);
        let qualifiers = component::normalize_qualifiers(raw_qualifiers);
        component::validate_qualifiers(&qualifiers)?;
        let subpath = raw_subpath.as_deref().and_then(component::normalize_subpath);

        let mut parts = Parts {
            namespace,
            name,
            version,
            qualifiers,
            subpath,
        };

        if let Some(ecosystem) = Ecosystem::from_tag(&ty) {
            ecosystem.normalize(&mut parts);
            ecosystem.validate(&parts)?;
        } else {
            trace!(%ty, "no registered rules for type, generic validation only");
        }

        Ok(Self { ty, parts })
    }

    /// The canonical lowercase type tag.
    pub fn package_type(&self) -> &str {
        &self.ty
    }

    /// The namespace, if present.
    pub fn namespace(&self) -> Option<&str> {
        self.parts.namespace.as_deref()
    }

    /// The package name.
    pub fn name(&self) -> &str {
        &self.parts.name
    }

    /// The version, if present.
    pub fn version(&self) -> Option<&str> {
        self.parts.version.as_deref()
    }

    /// The qualifier map; empty means absent.
    pub fn qualifiers(&self) -> &Qualifiers {
        &self.parts.qualifiers
    }

    /// The subpath, if present.
    pub fn subpath(&self) -> Option<&str> {
        self.parts.subpath.as_deref()
    }

    /// The registry entry selected by the type tag, if one exists.
    pub fn ecosystem(&self) -> Option<Ecosystem> {
        Ecosystem::from_tag(&self.ty)
    }

    /// Convert to the sparse plain-object form, omitting absent
    /// components.
    pub fn to_object(&self) -> PurlObject {
        PurlObject {
            package_type: self.ty.to_string(),
            namespace: self.namespace().map(Into::into),
            name: self.name().to_string(),
            version: self.version().map(Into::into),
            qualifiers: (!self.parts.qualifiers.is_empty())
                .then(|| (&self.parts.qualifiers).into()),
            subpath: self.subpath().map(Into::into),
        }
    }

    /// Render the plain-object form as JSON text.
    pub fn to_json(&self) -> String {
        match serde_json::to_string(&self.to_object()) {
            Ok(text) => text,
            Err(_) => panic!("purl object failed to serialize"),
        }
    }

    /// Parse JSON text in the plain-object form.
    ///
    /// Malformed JSON and non-object JSON raise [`ArgumentError`];
    /// component rule failures raise [`PurlError`](crate::PurlError)
    /// exactly as construction does.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(ArgumentError::Json)?;
        if !value.is_object() {
            return Err(ArgumentError::NotAnObject.into());
        }
        let object: PurlObject = serde_json::from_value(value).map_err(ArgumentError::Json)?;
        Self::try_from(object)
    }
}

#[bon]
impl PackageUrl {
    /// Construct a purl from raw components.
    ///
    /// The builder delegates to the same pipeline as [`PackageUrl::parse`]:
    /// inputs are normalized and validated, so the result is canonical.
    #[builder]
    pub fn new(
        /// The ecosystem tag; folded to lowercase.
        #[builder(into)]
        package_type: CompactString,
        /// Optional path-like namespace.
        #[builder(into)]
        namespace: Option<CompactString>,
        /// The package name.
        #[builder(into)]
        name: CompactString,
        /// Optional version.
        #[builder(into)]
        version: Option<CompactString>,
        /// Optional qualifier map.
        #[builder(into)]
        qualifiers: Option<Qualifiers>,
        /// Optional subpath.
        #[builder(into)]
        subpath: Option<CompactString>,
    ) -> Result<Self, Error> {
        Self::construct(
            package_type,
            namespace,
            name,
            version,
            qualifiers.unwrap_or_default(),
            subpath,
        )
    }
}

impl std::fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pkg:{}/", codec::encode(Component::Type, &self.ty))?;
        if let Some(namespace) = self.namespace() {
            write!(f, "{}/", codec::encode(Component::Namespace, namespace))?;
        }
        write!(f, "{}", codec::encode(Component::Name, self.name()))?;
        if let Some(version) = self.version() {
            write!(f, "@{}", codec::encode(Component::Version, version))?;
        }
        if !self.parts.qualifiers.is_empty() {
            write!(f, "?{}", codec::encode_qualifiers(&self.parts.qualifiers))?;
        }
        if let Some(subpath) = self.subpath() {
            write!(f, "#{}", codec::encode(Component::Subpath, subpath))?;
        }
        Ok(())
    }
}

impl FromStr for PackageUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

duplicate! {
    [
        ty;
        [ &str ];
        [ &String ];
        [ String ];
    ]
    impl TryFrom<ty> for PackageUrl {
        type Error = Error;
        fn try_from(s: ty) -> Result<Self, Self::Error> {
            Self::parse(s)
        }
    }
}

impl AsRef<PackageUrl> for PackageUrl {
    fn as_ref(&self) -> &PackageUrl {
        self
    }
}

impl TryFrom<PurlObject> for PackageUrl {
    type Error = Error;

    fn try_from(object: PurlObject) -> Result<Self, Self::Error> {
        Self::construct(
            object.package_type.into(),
            object.namespace.map(Into::into),
            object.name.into(),
            object.version.map(Into::into),
            object.qualifiers.map(Qualifiers::from).unwrap_or_default(),
            object.subpath.map(Into::into),
        )
    }
}

impl Serialize for PackageUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PackageUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        Self::parse(&input).map_err(serde::de::Error::custom)
    }
}

impl std::cmp::Ord for PackageUrl {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let cmp = alphanumeric_sort::compare_str;
        self.ty
            .cmp(&other.ty)
            .then_with(|| self.parts.namespace.cmp(&other.parts.namespace))
            .then_with(|| cmp(&self.parts.name, &other.parts.name))
            .then_with(|| match (&self.parts.version, &other.parts.version) {
                (Some(a), Some(b)) => cmp(a, b),
                (a, b) => a.is_some().cmp(&b.is_some()),
            })
            .then_with(|| self.parts.qualifiers.cmp(&other.parts.qualifiers))
            .then_with(|| self.parts.subpath.cmp(&other.parts.subpath))
    }
}

impl std::cmp::PartialOrd for PackageUrl {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialSchema for PackageUrl {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        ObjectBuilder::new()
            .description(Some(Self::DOCS))
            .examples([
                json!("pkg:npm/%40babel/core@7.20.0"),
                json!("pkg:cargo/serde@1.0.219"),
                json!("pkg:maven/org.apache.xmlgraphics/batik-anim@1.9.1"),
            ])
            .min_length(Some(1))
            .schema_type(Type::String)
            .build()
            .into()
    }
}

impl ToSchema for PackageUrl {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("PackageUrl")
    }
}

/// The sparse plain-object form of a purl.
///
/// Absent components are omitted when serializing; qualifiers appear
/// as a plain string map. Converting back into a [`PackageUrl`] runs
/// the full construction pipeline, so a round trip canonicalizes.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PurlObject {
    /// The type tag.
    #[serde(rename = "type")]
    pub package_type: String,

    /// The namespace, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// The package name.
    pub name: String,

    /// The version, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The qualifier pairs, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifiers: Option<BTreeMap<String, String>>,

    /// The subpath, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subpath: Option<String>,
}
