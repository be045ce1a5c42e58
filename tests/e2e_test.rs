/// End-to-end tests for the CLI
///
/// Every test runs the binary inside its own temporary directory so config
/// auto-discovery never picks up files from the repository.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("--options")
            .arg(fixture("options-layer.json"))
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("image-sbom")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--options"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("image-sbom").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("image-sbom")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: --options is required
    #[test]
    fn test_exit_code_missing_options() {
        cargo_bin_cmd!("image-sbom").assert().code(2);
    }

    /// Exit code 2: Invalid mode value
    #[test]
    fn test_exit_code_invalid_mode() {
        cargo_bin_cmd!("image-sbom")
            .args(["--options", "options.json", "--mode", "layer"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid mode"));
    }

    /// Exit code 1: Application error - options file does not exist
    #[test]
    fn test_exit_code_missing_options_file() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .args(["--options", "missing.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read file"));
    }

    /// Exit code 1: Application error - unknown generator
    #[test]
    fn test_exit_code_unknown_generator() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("--options")
            .arg(fixture("options-layer.json"))
            .args(["--generator", "spdx"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unknown SBOM generator: spdx"));
    }

    /// Exit code 1: Application error - index mode without index digest
    #[test]
    fn test_exit_code_index_without_digest() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("--options")
            .arg(fixture("options-layer.json"))
            .args(["--mode", "index"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Image index digest is not set"));
        assert!(!dir.path().join("sbom-index.cdx").exists());
    }

    /// Exit code 1: Application error - output directory is a file
    #[test]
    fn test_exit_code_output_dir_is_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("not-a-dir"), "").unwrap();
        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("--options")
            .arg(fixture("options-layer.json"))
            .args(["--output-dir", "not-a-dir"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid output directory"));
    }
}

mod output_tests {
    use super::*;

    #[test]
    fn test_layer_sbom_written_to_output_dir() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("--options")
            .arg(fixture("options-layer.json"))
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("sbom-x86_64.cdx"));

        let value = read_json(&dir.path().join("sbom-x86_64.cdx"));
        assert_eq!(value["bomFormat"], "CycloneDX");
        assert_eq!(value["specVersion"], "1.4");
        assert_eq!(value["components"][0]["description"], "OS layer");
        assert_eq!(value["dependencies"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_image_sbom_from_yaml_options() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("-i")
            .arg(fixture("options-image.yaml"))
            .assert()
            .success();

        let value = read_json(&dir.path().join("sbom-aarch64.cdx"));
        let image = &value["components"][0];
        assert_eq!(image["type"], "container");
        assert_eq!(image["components"][0]["name"], "Alpine Linux");
    }

    #[test]
    fn test_index_sbom() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("-i")
            .arg(fixture("options-index.yaml"))
            .args(["-m", "index", "-g", "cyclonedx"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Detected 2 image(s) in index"));

        let value = read_json(&dir.path().join("sbom-index.cdx"));
        assert_eq!(value["components"][0]["description"], "Multi-arch image index");
        assert_eq!(
            value["components"][0]["components"].as_array().unwrap().len(),
            2
        );
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let dir = TempDir::new().unwrap();
        let run = || {
            cargo_bin_cmd!("image-sbom")
                .current_dir(dir.path())
                .arg("-i")
                .arg(fixture("options-image.yaml"))
                .assert()
                .success();
            fs::read(dir.path().join("sbom-aarch64.cdx")).unwrap()
        };

        assert_eq!(run(), run());
    }
}

mod config_file_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_mode_and_output_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sboms")).unwrap();
        fs::write(
            dir.path().join("image-sbom.config.yml"),
            "mode: index\noutput_dir: sboms\n",
        )
        .unwrap();

        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("-i")
            .arg(fixture("options-index.yaml"))
            .assert()
            .success();

        assert!(dir.path().join("sboms/sbom-index.cdx").exists());
    }

    #[test]
    fn test_cli_overrides_config_mode() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("image-sbom.config.yml"), "mode: index\n").unwrap();

        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("-i")
            .arg(fixture("options-layer.json"))
            .args(["--mode", "image"])
            .assert()
            .success();

        assert!(dir.path().join("sbom-x86_64.cdx").exists());
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        fs::write(&config_path, "generators:\n  - spdx\n").unwrap();

        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("-i")
            .arg(fixture("options-layer.json"))
            .arg("--config")
            .arg(&config_path)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unknown SBOM generator: spdx"));
    }

    #[test]
    fn test_explicit_config_missing() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("-i")
            .arg(fixture("options-layer.json"))
            .args(["--config", "missing.yml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("image-sbom.config.yml"),
            "mode: image\nsign: true\n",
        )
        .unwrap();

        cargo_bin_cmd!("image-sbom")
            .current_dir(dir.path())
            .arg("-i")
            .arg(fixture("options-layer.json"))
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'sign' will be ignored",
            ));
    }
}
