use clap::Parser;
use image_sbom::application::dto::GenerationMode;
use std::path::PathBuf;

/// Generate CycloneDX SBOMs for built container images
#[derive(Parser, Debug)]
#[command(name = "image-sbom")]
#[command(version)]
#[command(about = "Generate CycloneDX SBOMs for built container images", long_about = None)]
pub struct Args {
    /// JSON or YAML file describing the image, its OS and installed packages
    #[arg(short = 'i', long = "options", value_name = "FILE")]
    pub options: PathBuf,

    /// Directory the SBOM documents are written to (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// What to describe: image (a single-arch layer or image) or index
    #[arg(short, long)]
    pub mode: Option<GenerationMode>,

    /// Generator to run; all registered generators run when omitted.
    /// Can be specified multiple times: -g cyclonedx
    #[arg(short, long = "generator", value_name = "KEY")]
    pub generators: Vec<String>,

    /// Path to a config file (defaults to image-sbom.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
