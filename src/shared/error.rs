use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All requested SBOM documents were written
    Success = 0,
    /// Application error (invalid input, reference parse error, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to parse image reference: {reference}\nDetails: {details}\n\n💡 Hint: Use a reference such as registry.example.com/org/image:tag")]
    ReferenceParse { reference: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Failed to encode SBOM document\nDetails: {details}")]
    Encode { details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to parse generation options: {path}\nDetails: {details}\n\n💡 Hint: Options files must be JSON (.json) or YAML (.yml, .yaml)")]
    OptionsParse { path: PathBuf, details: String },

    #[error("Invalid digest: {value}\nReason: {reason}")]
    InvalidDigest { value: String, reason: String },

    #[error("Invalid architecture: {value}\n\n💡 Hint: Use an APK (x86_64, aarch64, ...) or OCI (amd64, arm64, ...) architecture name")]
    InvalidArchitecture { value: String },

    #[error("Image index digest is not set\n\n💡 Hint: Index SBOMs require image.index_digest in the generation options")]
    MissingIndexDigest,

    #[error("Invalid output directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory with --output-dir")]
    InvalidOutputDir { path: PathBuf, reason: String },

    #[error("Unknown SBOM generator: {key}\n\n💡 Hint: Available generators: {available}")]
    UnknownGenerator { key: String, available: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
