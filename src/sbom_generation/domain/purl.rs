use std::collections::BTreeMap;
use std::fmt;

/// purl type for Alpine-style APK packages
pub const PURL_TYPE_APK: &str = "apk";

/// purl type for OCI artifacts (layers, images, indexes)
pub const PURL_TYPE_OCI: &str = "oci";

/// Qualifier key/value pairs attached to a package URL.
///
/// Keys are kept sorted so that identical logical inputs always render to
/// byte-identical identifiers. Entries with an empty value are kept in the map
/// but never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Qualifiers(BTreeMap<String, String>);

impl Qualifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Inserts the qualifier only when a non-empty value is present
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates over the qualifiers that will be rendered, in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, urlencoding::encode(value))?;
        }
        Ok(())
    }
}

/// A package URL (purl) identifying a package, layer, image or index.
///
/// Rendered as `pkg:<type>/<namespace>/<name>@<version>?<qualifiers>`.
/// Namespace segments, name, version and qualifier values are percent-encoded;
/// nothing is ever rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUrl {
    purl_type: String,
    namespace: String,
    name: String,
    version: String,
    qualifiers: Qualifiers,
}

impl PackageUrl {
    pub fn new(
        purl_type: &str,
        namespace: &str,
        name: &str,
        version: &str,
        qualifiers: Qualifiers,
    ) -> Self {
        Self {
            purl_type: purl_type.to_ascii_lowercase(),
            namespace: namespace.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            qualifiers,
        }
    }

    pub fn purl_type(&self) -> &str {
        &self.purl_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn qualifiers(&self) -> &Qualifiers {
        &self.qualifiers
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkg:{}/", self.purl_type)?;

        for segment in self.namespace.split('/').filter(|s| !s.is_empty()) {
            write!(f, "{}/", urlencoding::encode(segment))?;
        }

        f.write_str(&urlencoding::encode(&self.name))?;

        if !self.version.is_empty() {
            write!(f, "@{}", urlencoding::encode(&self.version))?;
        }

        if !self.qualifiers.is_empty() {
            write!(f, "?{}", self.qualifiers)?;
        }

        Ok(())
    }
}

/// Builds the canonical identifier string for an entity.
pub fn build_identifier(
    purl_type: &str,
    namespace: &str,
    name: &str,
    version: &str,
    qualifiers: &Qualifiers,
) -> String {
    PackageUrl::new(purl_type, namespace, name, version, qualifiers.clone()).to_string()
}
