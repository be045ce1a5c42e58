use crate::shared::error::SbomError;
use serde::Deserialize;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Package record from a resolved package manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPackage")]
pub struct Package {
    name: String,
    version: String,
    description: String,
    license: String,
    dependencies: Vec<String>,
}

#[derive(Deserialize)]
struct RawPackage {
    name: String,
    version: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    license: String,
    #[serde(default)]
    dependencies: Vec<String>,
}

impl TryFrom<RawPackage> for Package {
    type Error = SbomError;

    fn try_from(raw: RawPackage) -> Result<Self, Self::Error> {
        Ok(Package::new(raw.name, raw.version)?
            .with_description(raw.description)
            .with_license(raw.license)
            .with_dependencies(raw.dependencies))
    }
}

impl Package {
    pub fn new(name: String, version: String) -> Result<Self, SbomError> {
        validate_field("Package name", &name, MAX_PACKAGE_NAME_LENGTH)?;
        validate_field("Package version", &version, MAX_VERSION_LENGTH)?;

        Ok(Self {
            name,
            version,
            description: String::new(),
            license: String::new(),
            dependencies: Vec::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the SPDX license expression
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Sets the raw dependency declarations (`so:libc.so.6`, `musl>=1.2`, ...)
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

fn validate_field(label: &str, value: &str, max_len: usize) -> Result<(), SbomError> {
    if value.is_empty() {
        return Err(SbomError::Validation {
            message: format!("{} cannot be empty", label),
        });
    }

    // Security: Length limit to prevent DoS
    if value.len() > max_len {
        return Err(SbomError::Validation {
            message: format!(
                "{} is too long ({} bytes). Maximum allowed: {} bytes",
                label,
                value.len(),
                max_len
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_new_valid() {
        let package = Package::new("busybox".to_string(), "1.36.1-r0".to_string()).unwrap();
        assert_eq!(package.name(), "busybox");
        assert_eq!(package.version(), "1.36.1-r0");
        assert_eq!(package.license(), "");
        assert!(package.dependencies().is_empty());
    }

    #[test]
    fn test_package_new_empty_name() {
        let result = Package::new("".to_string(), "1.0.0".to_string());
        assert!(result.unwrap_err().to_string().contains("Package name cannot be empty"));
    }

    #[test]
    fn test_package_new_empty_version() {
        let result = Package::new("busybox".to_string(), "".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_package_name_too_long() {
        let result = Package::new("a".repeat(256), "1.0".to_string());
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_builder_methods() {
        let package = Package::new("ca-certificates".to_string(), "20230506-r0".to_string())
            .unwrap()
            .with_description("Common CA certificates PEM files")
            .with_license("MPL-2.0 AND MIT")
            .with_dependencies(vec!["so:libc.so.6".to_string()]);

        assert_eq!(package.description(), "Common CA certificates PEM files");
        assert_eq!(package.license(), "MPL-2.0 AND MIT");
        assert_eq!(package.dependencies(), ["so:libc.so.6".to_string()]);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let package: Package =
            serde_json::from_str(r#"{"name": "zlib", "version": "1.3-r0"}"#).unwrap();
        assert_eq!(package.name(), "zlib");
        assert_eq!(package.description(), "");
        assert!(package.dependencies().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let result = serde_json::from_str::<Package>(r#"{"name": "", "version": "1"}"#);
        assert!(result.is_err());
    }
}
