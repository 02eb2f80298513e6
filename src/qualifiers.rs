use std::collections::BTreeMap;
use std::str::FromStr;

use compact_str::CompactString;

use crate::{Error, codec, parse};

/// The qualifier map of a purl: `key=value` metadata pairs.
///
/// Keys are held in sorted order, so the canonical sorted-key
/// serialization is structural rather than a property enforced at
/// render time. Inserting an existing key overwrites its value;
/// combined with the order-preserving raw parser this yields the
/// lenient "last duplicate wins" behavior of the format.
///
/// Accepts the three input shapes the format tolerates:
/// a query-form string ([`FromStr`]), an iterable of pairs
/// ([`FromIterator`]), or a plain map ([`From<BTreeMap>`]).
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Qualifiers(BTreeMap<CompactString, CompactString>);

impl Qualifiers {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no qualifiers are present.
    ///
    /// An empty map and an absent qualifiers component are the same
    /// thing; serialization omits the `?` section entirely.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of qualifier pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up a qualifier value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(CompactString::as_str)
    }

    /// True when the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a pair, overwriting any existing value for the key.
    pub fn insert(&mut self, key: impl Into<CompactString>, value: impl Into<CompactString>) {
        self.0.insert(key.into(), value.into());
    }

    /// Iterate pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for Qualifiers {
    type Item = (CompactString, CompactString);
    type IntoIter = std::collections::btree_map::IntoIter<CompactString, CompactString>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Qualifiers
where
    K: Into<CompactString>,
    V: Into<CompactString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (key, value) in iter {
            out.insert(key, value);
        }
        out
    }
}

impl From<BTreeMap<String, String>> for Qualifiers {
    fn from(value: BTreeMap<String, String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<&Qualifiers> for Qualifiers {
    fn from(value: &Qualifiers) -> Self {
        value.clone()
    }
}

impl From<&Qualifiers> for BTreeMap<String, String> {
    fn from(value: &Qualifiers) -> Self {
        value
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Parse the query-string form, e.g. `arch=amd64&distro=fedora-25`.
/// Escapes are decoded with the qualifier rules (`%20` is a space,
/// a raw `+` is a space, `%2B` is a literal plus).
impl FromStr for Qualifiers {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pairs = parse::split_query(s)?;
        Ok(pairs.into_iter().collect())
    }
}

/// Renders the canonical encoded query form, keys sorted.
impl std::fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&codec::encode_qualifiers(self))
    }
}
