use crate::application::dto::{HeaderRequest, HeaderResponse};
use crate::header_generation::domain::{HeaderConfig, TemplateSource};
use crate::header_generation::services::HeaderTemplate;
use crate::ports::outbound::{BoilerplateSourceReader, ProgressReporter};
use crate::shared::Result;

/// GenerateHeaderUseCase - renders one boilerplate header
///
/// Runs `validate -> apply_defaults -> render` over a config built from the
/// request. It never writes; presenting the response is the caller's job.
///
/// # Type Parameters
/// * `BSR` - BoilerplateSourceReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateHeaderUseCase<BSR, PR> {
    source_reader: BSR,
    progress_reporter: PR,
}

impl<BSR, PR> GenerateHeaderUseCase<BSR, PR>
where
    BSR: BoilerplateSourceReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateHeaderUseCase with injected dependencies
    pub fn new(source_reader: BSR, progress_reporter: PR) -> Self {
        Self {
            source_reader,
            progress_reporter,
        }
    }

    /// Executes the header generation use case
    ///
    /// # Errors
    /// Returns an error if the boilerplate file cannot be read or the license
    /// key is unknown (`HeaderError::UnknownLicense`).
    pub fn execute(&self, request: HeaderRequest) -> Result<HeaderResponse> {
        let explicit_body = self.resolve_explicit_body(&request)?;

        let config = HeaderConfig {
            license_key: request.license_key,
            custom_licenses: Some(request.custom_licenses),
            owner: request.owner,
            year: request.year,
            explicit_body,
            output_path: request.output_path.unwrap_or_default(),
            source_extension: request.source_extension,
            template_source: None,
        };

        HeaderTemplate::validate(&config)?;
        let config = HeaderTemplate::apply_defaults(&config);
        let content = HeaderTemplate::render(&config);

        let used_explicit_body = config
            .template_source
            .as_ref()
            .is_some_and(TemplateSource::is_explicit);

        if used_explicit_body {
            self.progress_reporter
                .report("📝 Using the supplied boilerplate body verbatim");
        } else {
            self.progress_reporter.report(&format!(
                "📝 Rendering {} license header ({})",
                config.license_key,
                HeaderTemplate::copyright_line(&config.year, &config.owner)
            ));
        }

        Ok(HeaderResponse {
            content,
            output_path: config.output_path,
            license_key: config.license_key,
            year: config.year,
            used_explicit_body,
        })
    }

    /// Inline body first, then the boilerplate file
    fn resolve_explicit_body(&self, request: &HeaderRequest) -> Result<Option<String>> {
        if let Some(body) = request.explicit_body.as_ref().filter(|b| !b.is_empty()) {
            return Ok(Some(body.clone()));
        }

        match &request.boilerplate_file {
            Some(path) => {
                self.progress_reporter.report(&format!(
                    "📖 Loading boilerplate from: {}",
                    path.display()
                ));
                let body = self.source_reader.read_boilerplate(path)?;
                if body.is_empty() {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: {} is empty; falling back to the license template",
                        path.display()
                    ));
                }
                Ok(Some(body))
            }
            None => Ok(None),
        }
    }
}
