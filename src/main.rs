mod cli;
mod config;

use clap::Parser;
use cli::Args;
use config::ConfigFile;
use image_sbom::adapters::outbound::console::StderrProgressReporter;
use image_sbom::adapters::outbound::filesystem::FileSystemReader;
use image_sbom::application::dto::SbomRequest;
use image_sbom::application::use_cases::GenerateSbomUseCase;
use image_sbom::ports::inbound::SbomGenerationPort;
use image_sbom::shared::error::ExitCode;
use image_sbom::shared::Result;
use std::path::PathBuf;
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };

    let request = build_request(args, config);

    // Create adapters (Dependency Injection)
    let options_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();
    let use_case = GenerateSbomUseCase::new(options_reader, progress_reporter);

    let response = use_case.generate_sboms(request)?;
    for document in &response.documents {
        println!("{}", document.path.display());
    }

    Ok(())
}

/// Merges CLI arguments over config file values; CLI wins
fn build_request(args: Args, config: ConfigFile) -> SbomRequest {
    let mode = args
        .mode
        .or_else(|| config.generation_mode())
        .unwrap_or_default();
    let output_dir = args
        .output_dir
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let generators = if args.generators.is_empty() {
        config.generators.unwrap_or_default()
    } else {
        args.generators
    };

    SbomRequest::new(args.options, output_dir, mode, generators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_sbom::application::dto::GenerationMode;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["image-sbom", "-i", "options.json"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_build_request_defaults() {
        let request = build_request(args(&[]), ConfigFile::default());
        assert_eq!(request.options_path, PathBuf::from("options.json"));
        assert_eq!(request.output_dir, PathBuf::from("."));
        assert_eq!(request.mode, GenerationMode::Image);
        assert!(request.generator_keys.is_empty());
    }

    #[test]
    fn test_build_request_uses_config_values() {
        let config = ConfigFile {
            output_dir: Some(PathBuf::from("sboms")),
            mode: Some("index".to_string()),
            generators: Some(vec!["cyclonedx".to_string()]),
            ..ConfigFile::default()
        };

        let request = build_request(args(&[]), config);
        assert_eq!(request.output_dir, PathBuf::from("sboms"));
        assert_eq!(request.mode, GenerationMode::Index);
        assert_eq!(request.generator_keys, vec!["cyclonedx".to_string()]);
    }

    #[test]
    fn test_build_request_cli_overrides_config() {
        let config = ConfigFile {
            output_dir: Some(PathBuf::from("sboms")),
            mode: Some("index".to_string()),
            generators: Some(vec!["spdx".to_string()]),
            ..ConfigFile::default()
        };

        let request = build_request(
            args(&["-o", "out", "-m", "image", "-g", "cyclonedx"]),
            config,
        );
        assert_eq!(request.output_dir, PathBuf::from("out"));
        assert_eq!(request.mode, GenerationMode::Image);
        assert_eq!(request.generator_keys, vec!["cyclonedx".to_string()]);
    }
}
