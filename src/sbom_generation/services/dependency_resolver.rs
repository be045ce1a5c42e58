use crate::sbom_generation::domain::{build_identifier, Qualifiers, PURL_TYPE_APK};
use crate::sbom_generation::policies::DependencyDeclaration;

/// DependencyResolver service for turning raw dependency declarations into
/// dependency edge targets
///
/// Edges reference packages by name only, so the resulting identifiers carry
/// no version. A target that is missing from the package list still gets an
/// edge.
pub struct DependencyResolver;

impl DependencyResolver {
    /// Resolves declarations to APK package identifiers
    ///
    /// # Arguments
    /// * `raw_dependencies` - Declarations in manifest order
    /// * `namespace` - Distribution id of the owning package
    /// * `qualifiers` - Qualifiers of the owning package
    ///
    /// # Returns
    /// Identifiers in input order, not deduplicated
    pub fn resolve(
        raw_dependencies: &[String],
        namespace: &str,
        qualifiers: &Qualifiers,
    ) -> Vec<String> {
        raw_dependencies
            .iter()
            .filter_map(|declaration| DependencyDeclaration::package_name(declaration))
            .map(|name| build_identifier(PURL_TYPE_APK, namespace, name, "", qualifiers))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn x86_64() -> Qualifiers {
        Qualifiers::new().with("arch", "x86_64")
    }

    #[test]
    fn test_virtual_dependency_yields_no_edge() {
        let edges = DependencyResolver::resolve(&deps(&["so:libc.so.6"]), "wolfi", &x86_64());
        assert!(edges.is_empty());
    }

    #[test]
    fn test_constrained_dependency_yields_bare_name_edge() {
        let edges = DependencyResolver::resolve(&deps(&["musl>=1.2.3"]), "wolfi", &x86_64());
        assert_eq!(edges, vec!["pkg:apk/wolfi/musl?arch=x86_64"]);
    }

    #[test]
    fn test_empty_dependencies_yield_no_edge() {
        let edges = DependencyResolver::resolve(&deps(&["", "=1.0", "~2"]), "wolfi", &x86_64());
        assert!(edges.is_empty());
    }

    #[test]
    fn test_order_preserved_and_not_deduplicated() {
        let edges = DependencyResolver::resolve(
            &deps(&["zlib", "cmd:sh", "busybox", "zlib>1.2"]),
            "alpine",
            &Qualifiers::new().with("arch", "aarch64"),
        );
        assert_eq!(
            edges,
            vec![
                "pkg:apk/alpine/zlib?arch=aarch64",
                "pkg:apk/alpine/busybox?arch=aarch64",
                "pkg:apk/alpine/zlib?arch=aarch64",
            ]
        );
    }
}
