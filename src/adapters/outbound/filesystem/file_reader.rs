use crate::ports::outbound::OptionsReader;
use crate::sbom_generation::domain::GenerationOptions;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Serialization of an options file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionsEncoding {
    Json,
    Yaml,
}

impl OptionsEncoding {
    fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Some(OptionsEncoding::Json),
            Some("yml") | Some("yaml") => Some(OptionsEncoding::Yaml),
            _ => None,
        }
    }
}

/// FileSystemReader adapter for reading generation options from disk
///
/// This adapter implements the OptionsReader port for JSON and YAML files.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "options file")?;

        let metadata = fs::metadata(path)?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        Ok(fs::read_to_string(path)?)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsReader for FileSystemReader {
    fn read_options(&self, path: &Path) -> Result<GenerationOptions> {
        let parse_error = |details: String| SbomError::OptionsParse {
            path: path.to_path_buf(),
            details,
        };

        let encoding = OptionsEncoding::from_path(path).ok_or_else(|| {
            parse_error("unsupported file extension".to_string())
        })?;

        let content = self.safe_read_file(path).map_err(|e| SbomError::FileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let options: GenerationOptions = match encoding {
            OptionsEncoding::Json => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            OptionsEncoding::Yaml => {
                serde_yaml_ng::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
        };

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const OPTIONS_JSON: &str = r#"{
        "os": {"id": "wolfi", "name": "Wolfi", "version": "20230201"},
        "image": {"arch": "aarch64", "repository": "cgr.dev/chainguard/static"},
        "packages": [
            {"name": "musl", "version": "1.2.4-r0", "license": "MIT"}
        ]
    }"#;

    #[test]
    fn test_read_json_options() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.json");
        fs::write(&path, OPTIONS_JSON).unwrap();

        let options = FileSystemReader::new().read_options(&path).unwrap();
        assert_eq!(options.os.id, "wolfi");
        assert_eq!(options.packages.len(), 1);
        assert_eq!(options.image.repository, "cgr.dev/chainguard/static");
    }

    #[test]
    fn test_read_yaml_options() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.YAML");
        fs::write(
            &path,
            "os:\n  id: alpine\npackages:\n  - name: busybox\n    version: 1.36.1-r5\n",
        )
        .unwrap();

        let options = FileSystemReader::new().read_options(&path).unwrap();
        assert_eq!(options.os.id, "alpine");
        assert_eq!(options.packages[0].name(), "busybox");
    }

    #[test]
    fn test_read_options_missing_file() {
        let path = PathBuf::from("/nonexistent/options.json");
        let err = FileSystemReader::new().read_options(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::FileRead { .. })
        ));
    }

    #[test]
    fn test_read_options_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.toml");
        fs::write(&path, "").unwrap();

        let err = FileSystemReader::new().read_options(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"));
    }

    #[test]
    fn test_read_options_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.json");
        fs::write(&path, r#"{"packages": [{"name": "musl"}]}"#).unwrap();

        let err = FileSystemReader::new().read_options(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::OptionsParse { .. })
        ));
    }
}
