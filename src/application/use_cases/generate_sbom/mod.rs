use crate::application::dto::{GeneratedSbom, GenerationMode, SbomRequest, SbomResponse};
use crate::application::factories::GeneratorRegistry;
use crate::ports::inbound::SbomGenerationPort;
use crate::ports::outbound::{OptionsReader, ProgressReporter, SbomGenerator};
use crate::sbom_generation::domain::{Architecture, GenerationOptions};
use crate::shared::error::SbomError;
use crate::shared::security::validate_output_directory;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Reads the generation options snapshot, then runs every selected
/// generator against it, writing one document per generator into the
/// output directory.
///
/// # Type Parameters
/// * `OR` - OptionsReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<OR, PR> {
    options_reader: OR,
    progress_reporter: PR,
    registry: GeneratorRegistry,
}

impl<OR, PR> GenerateSbomUseCase<OR, PR>
where
    OR: OptionsReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase using the built-in generators
    pub fn new(options_reader: OR, progress_reporter: PR) -> Self {
        Self::with_registry(options_reader, progress_reporter, GeneratorRegistry::default())
    }

    /// Creates a new GenerateSbomUseCase with an explicit generator registry
    pub fn with_registry(
        options_reader: OR,
        progress_reporter: PR,
        registry: GeneratorRegistry,
    ) -> Self {
        Self {
            options_reader,
            progress_reporter,
            registry,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// Generator keys are resolved before anything is written, so an unknown
    /// key never leaves a partial set of documents behind.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Read the options snapshot
        self.progress_reporter.report(&format!(
            "📖 Loading generation options from: {}",
            request.options_path.display()
        ));

        let options = self.options_reader.read_options(&request.options_path)?;
        self.report_summary(&options, request.mode);

        // Step 2: Validate the destination and resolve generators
        validate_output_directory(&request.output_dir).map_err(|e| {
            SbomError::InvalidOutputDir {
                path: request.output_dir.clone(),
                reason: e.to_string(),
            }
        })?;

        let generators = self.registry.select(&request.generator_keys)?;

        // Step 3: Render one document per generator
        let total = generators.len();
        let mut documents = Vec::with_capacity(total);
        for (i, generator) in generators.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(i, total, Some(generator.key()));

            let path = request.output_dir.join(output_file_name(
                request.mode,
                options.image.arch,
                generator.ext(),
            ));

            if let Err(e) = run_generator(generator, &options, request.mode, &path) {
                self.progress_reporter.report_error(&format!(
                    "❌ {} generator failed for {}",
                    generator.key(),
                    path.display()
                ));
                return Err(e);
            }

            documents.push(GeneratedSbom {
                generator: generator.key().to_string(),
                path,
            });
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Wrote {} SBOM document(s) to {}",
            documents.len(),
            request.output_dir.display()
        ));

        Ok(SbomResponse::new(documents))
    }

    fn report_summary(&self, options: &GenerationOptions, mode: GenerationMode) {
        match mode {
            GenerationMode::Image => self.progress_reporter.report(&format!(
                "✅ Detected {} package(s)",
                options.packages.len()
            )),
            GenerationMode::Index => self.progress_reporter.report(&format!(
                "✅ Detected {} image(s) in index",
                options.image.images.len()
            )),
        }
    }
}

impl<OR, PR> SbomGenerationPort for GenerateSbomUseCase<OR, PR>
where
    OR: OptionsReader,
    PR: ProgressReporter,
{
    fn generate_sboms(&self, request: SbomRequest) -> Result<SbomResponse> {
        self.execute(request)
    }
}

fn run_generator(
    generator: &dyn SbomGenerator,
    options: &GenerationOptions,
    mode: GenerationMode,
    path: &Path,
) -> Result<()> {
    match mode {
        GenerationMode::Image => generator.generate(options, path),
        GenerationMode::Index => generator.generate_index(options, path),
    }
}

/// File name of a generated document
///
/// Image SBOMs are named after the APK spelling of their architecture
/// (`sbom-x86_64.cdx`), or `sbom.<ext>` when no architecture is known.
/// Index SBOMs are always `sbom-index.<ext>`.
pub fn output_file_name(mode: GenerationMode, arch: Option<Architecture>, ext: &str) -> PathBuf {
    let stem = match (mode, arch) {
        (GenerationMode::Index, _) => "sbom-index".to_string(),
        (GenerationMode::Image, Some(arch)) => format!("sbom-{}", arch.to_apk()),
        (GenerationMode::Image, None) => "sbom".to_string(),
    };
    PathBuf::from(format!("{}.{}", stem, ext))
}
