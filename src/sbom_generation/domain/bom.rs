use serde::Serialize;
use std::collections::HashSet;

/// Value of the `bomFormat` envelope field
pub const BOM_FORMAT: &str = "CycloneDX";

/// CycloneDX schema version emitted by this crate
pub const SPEC_VERSION: &str = "1.4";

/// Document version; always the first revision
pub const DOCUMENT_VERSION: u32 = 1;

/// CycloneDX 1.4 document envelope
///
/// Field order here is the field order of the rendered JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    #[serde(rename = "bomFormat")]
    pub bom_format: String,
    #[serde(rename = "specVersion")]
    pub spec_version: String,
    pub version: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
}

impl Document {
    /// The single root component of the tree
    pub fn root(&self) -> Option<&Component> {
        self.components.first()
    }

    /// Every `bom-ref` in the component tree, depth first
    pub fn bom_refs(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        for component in &self.components {
            component.collect_bom_refs(&mut refs);
        }
        refs
    }

    /// `bom-ref` values that occur more than once in the tree
    pub fn duplicate_bom_refs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for bom_ref in self.bom_refs() {
            if !seen.insert(bom_ref) && !duplicates.contains(&bom_ref) {
                duplicates.push(bom_ref);
            }
        }
        duplicates
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    OperatingSystem,
    Container,
}

/// A node of the component tree: package, layer, image or index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    #[serde(rename = "bom-ref")]
    pub bom_ref: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub name: String,
    pub version: String,
    pub description: String,
    pub purl: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hashes: Vec<Hash>,
    #[serde(
        rename = "externalReferences",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub external_references: Vec<ExternalReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<License>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl Component {
    /// Creates a leaf component whose `bom-ref` and `purl` are both `purl`
    pub fn new(component_type: ComponentType, purl: String) -> Self {
        Self {
            bom_ref: purl.clone(),
            component_type,
            name: String::new(),
            version: String::new(),
            description: String::new(),
            purl,
            hashes: Vec::new(),
            external_references: Vec::new(),
            licenses: Vec::new(),
            components: Vec::new(),
        }
    }

    fn collect_bom_refs<'a>(&'a self, refs: &mut Vec<&'a str>) {
        refs.push(&self.bom_ref);
        for child in &self.components {
            child.collect_bom_refs(refs);
        }
    }
}

/// A single SPDX license expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    pub expression: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HashAlgorithm {
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlgorithm {
    /// Algorithm prefix used in OCI digests
    pub fn oci_prefix(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    pub fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha384 => 96,
            HashAlgorithm::Sha512 => 128,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hash {
    #[serde(rename = "alg")]
    pub algorithm: HashAlgorithm,
    #[serde(rename = "content")]
    pub value: String,
}

/// Reserved; no scenario populates external references yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalReference {
    pub url: String,
    #[serde(rename = "type")]
    pub reference_type: String,
}

/// Dependency edge list of one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    #[serde(rename = "ref")]
    pub bom_ref: String,
    #[serde(rename = "dependsOn")]
    pub depends_on: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(purl: &str) -> Component {
        Component::new(ComponentType::OperatingSystem, purl.to_string())
    }

    #[test]
    fn test_component_new_sets_ref_and_purl() {
        let component = leaf("pkg:apk/wolfi/busybox@1.36.1-r0");
        assert_eq!(component.bom_ref, component.purl);
        assert!(component.components.is_empty());
    }

    #[test]
    fn test_serialize_omits_empty_lists_but_keeps_strings() {
        let json = serde_json::to_value(leaf("pkg:apk/wolfi/zlib@1.3-r0")).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["type"], "operating-system");
        assert_eq!(object["description"], "");
        assert!(!object.contains_key("hashes"));
        assert!(!object.contains_key("externalReferences"));
        assert!(!object.contains_key("licenses"));
        assert!(!object.contains_key("components"));
    }

    #[test]
    fn test_serialize_hash_and_dependency() {
        let hash = Hash {
            algorithm: HashAlgorithm::Sha256,
            value: "abc".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&hash).unwrap(),
            r#"{"alg":"SHA-256","content":"abc"}"#
        );

        let dependency = Dependency {
            bom_ref: "pkg:apk/wolfi/a@1".to_string(),
            depends_on: vec![],
        };
        assert_eq!(
            serde_json::to_string(&dependency).unwrap(),
            r#"{"ref":"pkg:apk/wolfi/a@1","dependsOn":[]}"#
        );
    }

    #[test]
    fn test_duplicate_bom_refs() {
        let mut root = leaf("pkg:oci/image@sha256%3A01");
        root.components = vec![leaf("pkg:apk/wolfi/a@1"), leaf("pkg:apk/wolfi/a@1")];
        let document = Document {
            bom_format: BOM_FORMAT.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            version: DOCUMENT_VERSION,
            components: vec![root],
            dependencies: vec![],
        };

        assert_eq!(document.bom_refs().len(), 3);
        assert_eq!(document.duplicate_bom_refs(), vec!["pkg:apk/wolfi/a@1"]);
    }
}
