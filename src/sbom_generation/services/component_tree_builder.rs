use crate::sbom_generation::domain::{
    build_identifier, ArchImageInfo, Component, ComponentType, Dependency, Digest,
    GenerationOptions, Hash, License, Qualifiers, PURL_TYPE_APK, PURL_TYPE_OCI,
};
use crate::sbom_generation::services::DependencyResolver;
use crate::shared::error::SbomError;
use crate::shared::Result;
use oci_distribution::Reference;

/// purl name of an index when no image reference is configured
const INDEX_FALLBACK_NAME: &str = "index";

/// purl name of images and layers when no usable image reference is configured
const IMAGE_FALLBACK_NAME: &str = "image";

/// Root component plus the flat dependency edge list
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTree {
    pub root: Component,
    pub dependencies: Vec<Dependency>,
}

/// ComponentTreeBuilder service for assembling the component hierarchy
///
/// The shape depends on the image metadata:
/// - no image digest: the OS layer is the root, packages are its children
/// - image digest: a container image wraps the OS layer
/// - index: a multi-arch index with one child image per architecture
pub struct ComponentTreeBuilder<'a> {
    options: &'a GenerationOptions,
}

impl<'a> ComponentTreeBuilder<'a> {
    pub fn new(options: &'a GenerationOptions) -> Self {
        Self { options }
    }

    /// Builds the tree of a single-architecture layer or image
    pub fn build_image_tree(&self) -> ComponentTree {
        let (packages, dependencies) = self.package_components();
        let layer = self.layer_component(packages);

        let root = match &self.options.image.image_digest {
            Some(digest) => self.image_component(digest, layer),
            None => layer,
        };

        ComponentTree { root, dependencies }
    }

    /// Builds the tree of a multi-architecture index
    ///
    /// # Errors
    /// Returns an error if the index digest is missing or the configured
    /// image reference cannot be parsed
    pub fn build_index_tree(&self) -> Result<ComponentTree> {
        let image = &self.options.image;
        let index_digest = image
            .index_digest
            .as_ref()
            .ok_or(SbomError::MissingIndexDigest)?;

        let (repo_name, component_name) = if image.name.is_empty() {
            (INDEX_FALLBACK_NAME.to_string(), index_digest.to_string())
        } else {
            let repo_name = parse_repository(&image.name)?;
            let component_name = format!("{}@{}", repo_name, index_digest);
            (repo_name, component_name)
        };

        let mut qualifiers = self.oci_qualifiers();
        qualifiers.insert_opt("mediaType", image.index_media_type.as_deref());

        let purl = build_identifier(
            PURL_TYPE_OCI,
            "",
            &repo_name,
            &index_digest.to_string(),
            &qualifiers,
        );

        let mut index = Component::new(ComponentType::Container, purl);
        index.name = component_name;
        index.version = index_digest.hex().to_string();
        index.description = "Multi-arch image index".to_string();
        index.hashes = vec![digest_hash(index_digest)];
        index.components = image
            .images
            .iter()
            .map(|info| self.arch_image_component(info))
            .collect();

        Ok(ComponentTree {
            root: index,
            dependencies: Vec::new(),
        })
    }

    /// Builds one component and one dependency edge list per package
    pub fn package_components(&self) -> (Vec<Component>, Vec<Dependency>) {
        let namespace = &self.options.os.id;
        let qualifiers = self.package_qualifiers();

        self.options
            .packages
            .iter()
            .map(|pkg| {
                let purl = build_identifier(
                    PURL_TYPE_APK,
                    namespace,
                    pkg.name(),
                    pkg.version(),
                    &qualifiers,
                );

                let dependency = Dependency {
                    bom_ref: purl.clone(),
                    depends_on: DependencyResolver::resolve(
                        pkg.dependencies(),
                        namespace,
                        &qualifiers,
                    ),
                };

                let mut component = Component::new(ComponentType::OperatingSystem, purl);
                component.name = pkg.name().to_string();
                component.version = pkg.version().to_string();
                component.description = pkg.description().to_string();
                // An empty expression is still emitted as a single entry.
                component.licenses = vec![License {
                    expression: pkg.license().to_string(),
                }];

                (component, dependency)
            })
            .unzip()
    }

    /// Builds the component of one image referenced by an index
    ///
    /// Unlike [`build_index_tree`](Self::build_index_tree), an unparsable image
    /// reference is tolerated here and the fallback name is used.
    pub fn arch_image_component(&self, info: &ArchImageInfo) -> Component {
        let image = &self.options.image;
        let repo_name = Some(image.name.as_str())
            .filter(|name| !name.is_empty())
            .and_then(|name| parse_repository(name).ok())
            .filter(|repo| !repo.is_empty())
            .unwrap_or_else(|| IMAGE_FALLBACK_NAME.to_string());

        let platform = info.arch.to_oci_platform();
        let mut qualifiers = Qualifiers::new();
        qualifiers.insert_opt("repository_url", Some(image.repository.as_str()));
        qualifiers.insert("arch", platform.architecture);
        qualifiers.insert("os", platform.os);
        qualifiers.insert_opt("mediaType", image.index_media_type.as_deref());

        let digest = info.digest.to_string();
        let purl = build_identifier(PURL_TYPE_OCI, "", &repo_name, &digest, &qualifiers);

        let mut component = Component::new(ComponentType::Container, purl);
        component.name = digest.clone();
        component.version = digest;
        component.description = format!("Container image for {}/{}", platform.os, info.arch);
        component.hashes = vec![digest_hash(&info.digest)];
        component
    }

    fn layer_component(&self, packages: Vec<Component>) -> Component {
        let version = self
            .options
            .image
            .layer_digest
            .as_ref()
            .map(Digest::to_string)
            .unwrap_or_default();
        let purl = build_identifier(
            PURL_TYPE_OCI,
            "",
            self.image_name(),
            &version,
            &self.oci_qualifiers(),
        );

        let mut layer = Component::new(ComponentType::OperatingSystem, purl);
        layer.name = self.options.os.name.clone();
        layer.version = self.options.os.version.clone();
        layer.description = "OS layer".to_string();
        layer.components = packages;
        layer
    }

    fn image_component(&self, digest: &Digest, layer: Component) -> Component {
        let purl = build_identifier(
            PURL_TYPE_OCI,
            "",
            self.image_name(),
            &digest.to_string(),
            &self.oci_qualifiers(),
        );

        let mut image = Component::new(ComponentType::Container, purl);
        image.name = self.image_name().to_string();
        image.version = digest.to_string();
        image.description = "Container image".to_string();
        image.hashes = vec![digest_hash(digest)];
        image.components = vec![layer];
        image
    }

    /// Qualifiers of APK package purls
    fn package_qualifiers(&self) -> Qualifiers {
        let mut qualifiers = Qualifiers::new();
        qualifiers.insert_opt("arch", self.options.image.arch.map(|a| a.to_apk()));
        qualifiers
    }

    /// Qualifiers shared by the layer, image and index purls
    fn oci_qualifiers(&self) -> Qualifiers {
        let image = &self.options.image;
        let mut qualifiers = Qualifiers::new();
        qualifiers.insert_opt("repository_url", Some(image.repository.as_str()));
        qualifiers.insert_opt(
            "arch",
            image.arch.map(|a| a.to_oci_platform().architecture),
        );
        qualifiers
    }

    fn image_name(&self) -> &str {
        match self.options.image.name.as_str() {
            "" => IMAGE_FALLBACK_NAME,
            name => name,
        }
    }
}

/// Repository path of an image reference (`cgr.dev/chainguard/static:latest`
/// → `chainguard/static`)
fn parse_repository(reference: &str) -> Result<String> {
    let parsed = Reference::try_from(reference).map_err(|e| SbomError::ReferenceParse {
        reference: reference.to_string(),
        details: e.to_string(),
    })?;
    Ok(parsed.repository().to_string())
}

fn digest_hash(digest: &Digest) -> Hash {
    Hash {
        algorithm: digest.algorithm(),
        value: digest.hex().to_string(),
    }
}
