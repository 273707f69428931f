//! End-to-end presentation orchestration.

use crate::{
    AssemblyEvent, AssemblyOutcome, AssemblyState, EaselConfig, GenerationMode, OutlineProtocol,
    SlideAssembler, VideoJob, creative, edit, merge_sources, parse_delimited, parse_structured,
    plan_outline,
};
use easel_core::{AspectRatio, GenerationParams, Slide, SlideStructure};
use easel_error::{EaselError, EaselResult, JobError, JobErrorKind};
use easel_interface::{EaselDriver, ImageEditing, ImageGeneration, VideoGeneration};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

/// Runs the full pipeline against one generation backend.
///
/// The studio holds no presentation state. Each call takes the caller's
/// slides by reference and returns a new value for the caller to keep.
///
/// # Example
///
/// ```no_run
/// use easel_core::GenerationParams;
/// use easel_interface::{EaselDriver, ImageGeneration};
/// use easel_presentation::{EaselConfig, PresentationStudio};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example<D: EaselDriver + ImageGeneration>(driver: D) -> Result<(), Box<dyn std::error::Error>> {
/// let studio = PresentationStudio::new(driver, EaselConfig::load()?);
/// let params = GenerationParams::builder()
///     .prompt("The history of tea")
///     .slide_count(6u32)
///     .build()?;
///
/// let outcome = studio.generate(&params, &CancellationToken::new()).await?;
/// println!("{} slides", outcome.slides().len());
/// # Ok(())
/// # }
/// ```
pub struct PresentationStudio<D> {
    driver: D,
    config: EaselConfig,
}

impl<D> PresentationStudio<D> {
    /// Create a studio over `driver`.
    pub fn new(driver: D, config: EaselConfig) -> Self {
        Self { driver, config }
    }

    /// The generation backend.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Active configuration.
    pub fn config(&self) -> &EaselConfig {
        &self.config
    }
}

impl<D: EaselDriver> PresentationStudio<D> {
    /// Produce the slide outline for `params`.
    ///
    /// Validates the parameters, requests the outline in the selected mode,
    /// parses it with the mode's protocol, and attaches citations in
    /// search-grounded mode.
    ///
    /// # Errors
    ///
    /// Validation failures are returned before any remote call. Otherwise the
    /// remote failure or the parse failure of the response.
    #[instrument(skip_all, fields(slide_count = params.slide_count()))]
    pub async fn outline(&self, params: &GenerationParams) -> EaselResult<Vec<SlideStructure>> {
        params.validate()?;

        let plan = plan_outline(params, &self.config);
        let mode = *plan.mode();
        let protocol = *plan.protocol();
        info!(?mode, model = %plan.request().model, "Requesting outline");

        let response = self.driver.generate_content(plan.request()).await?;

        let slides = match protocol {
            OutlineProtocol::StructuredJson => parse_structured(&response.text, mode.outline_mode())?,
            OutlineProtocol::Delimited => parse_delimited(&response.text)?,
        };

        let slides = if mode == GenerationMode::SearchGrounded {
            merge_sources(slides, response.grounding_chunks.as_deref())
        } else {
            slides
        };

        info!(count = slides.len(), "Outline ready");
        Ok(slides)
    }
}

impl<D: EaselDriver + ImageGeneration> PresentationStudio<D> {
    /// Generate a complete presentation.
    ///
    /// # Errors
    ///
    /// Failures before assembly (validation, outline request, parsing,
    /// cancellation while outlining) are returned as errors. Failures while
    /// illustrating slides are reported through [`AssemblyOutcome::Errored`]
    /// together with the slides finished so far.
    pub async fn generate(
        &self,
        params: &GenerationParams,
        cancel: &CancellationToken,
    ) -> EaselResult<AssemblyOutcome> {
        self.run(params, None, cancel).await
    }

    /// Generate a complete presentation, publishing progress to `progress`.
    ///
    /// # Errors
    ///
    /// As [`generate`](Self::generate).
    pub async fn generate_with_progress(
        &self,
        params: &GenerationParams,
        progress: &UnboundedSender<AssemblyEvent>,
        cancel: &CancellationToken,
    ) -> EaselResult<AssemblyOutcome> {
        self.run(params, Some(progress), cancel).await
    }

    #[instrument(skip_all)]
    async fn run(
        &self,
        params: &GenerationParams,
        progress: Option<&UnboundedSender<AssemblyEvent>>,
        cancel: &CancellationToken,
    ) -> EaselResult<AssemblyOutcome> {
        let publish = |state| {
            if let Some(progress) = progress {
                let _ = progress.send(AssemblyEvent::StateChanged(state));
            }
        };

        publish(AssemblyState::Outlining);
        let outline = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(EaselError::from(JobError::new(JobErrorKind::Cancelled))),
            outline = self.outline(params) => outline,
        };
        let structures = match outline {
            Ok(structures) => structures,
            Err(e) => {
                error!(error = %e, "Outline failed");
                publish(AssemblyState::Errored);
                return Err(e);
            }
        };

        let assembler = SlideAssembler::new(&self.driver, &self.config.models.image, &self.config.images);
        let assembler = match progress {
            Some(progress) => assembler.with_progress(progress),
            None => assembler,
        };
        Ok(assembler.assemble(structures, cancel).await)
    }

    /// Generate one standalone image, returned as a data URL.
    ///
    /// # Errors
    ///
    /// See [`generate_standalone_image`](crate::generate_standalone_image).
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> EaselResult<String> {
        creative::generate_standalone_image(
            &self.driver,
            &self.config.models.image,
            &self.config.images.output_mime_type,
            prompt,
            aspect_ratio,
        )
        .await
    }
}

impl<D: EaselDriver + ImageEditing> PresentationStudio<D> {
    /// Apply an edit instruction to an arbitrary embedded image.
    ///
    /// # Errors
    ///
    /// See [`edit_image`](crate::edit_image).
    pub async fn edit_image(&self, image_url: &str, instruction: &str) -> EaselResult<String> {
        edit::edit_image(&self.driver, &self.config.models.edit, image_url, instruction).await
    }

    /// Replace the image of one slide, returning the updated collection.
    ///
    /// # Errors
    ///
    /// See [`edit_slide`](crate::edit_slide).
    pub async fn edit_slide(
        &self,
        slides: &[Slide],
        index: usize,
        instruction: &str,
    ) -> EaselResult<Vec<Slide>> {
        edit::edit_slide(&self.driver, &self.config.models.edit, slides, index, instruction).await
    }
}

impl<D: EaselDriver + VideoGeneration> PresentationStudio<D> {
    /// A video job configured from this studio's settings.
    pub fn video_job(&self) -> VideoJob<'_, D> {
        VideoJob::new(&self.driver, &self.config.models.video, &self.config.video)
    }
}
