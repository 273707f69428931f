//! Sequential slide assembly with progressive publishing.

use crate::{ImagesConfig, prompts};
use easel_core::{ImageRequest, Slide, SlideStructure};
use easel_error::{EaselError, EaselResult, GeminiError, GeminiErrorKind, JobError, JobErrorKind};
use easel_interface::ImageGeneration;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

/// Phase of a generation run.
///
/// `Idle → Outlining → GeneratingSlide(0..n) → Complete`, with `Errored`
/// reachable from any phase after `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AssemblyState {
    /// Nothing running
    #[default]
    Idle,
    /// Waiting for the outline
    Outlining,
    /// Illustrating the slide at this index
    GeneratingSlide(usize),
    /// Every slide finished
    Complete,
    /// The run stopped at a failure
    Errored,
}

/// Progress notification for an observer.
#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyEvent {
    /// The run entered a new phase
    StateChanged(AssemblyState),
    /// A slide finished; `slides` is every slide finished so far, in order
    SlideCompleted {
        /// Index of the slide that just finished
        index: usize,
        /// Snapshot of the collection
        slides: Vec<Slide>,
    },
}

/// Result of an assembly run.
#[derive(Debug)]
pub enum AssemblyOutcome {
    /// Every slide has an illustration
    Complete(Vec<Slide>),
    /// The run stopped at `failed_index`; `completed` holds the slides before it
    Errored {
        /// Slides finished before the failure
        completed: Vec<Slide>,
        /// Index of the slide whose illustration failed
        failed_index: usize,
        /// What went wrong
        error: EaselError,
    },
}

impl AssemblyOutcome {
    /// Slides finished by the run, complete or not.
    pub fn slides(&self) -> &[Slide] {
        match self {
            Self::Complete(slides) => slides,
            Self::Errored { completed, .. } => completed,
        }
    }

    /// Whether every slide finished.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The failure, if the run stopped early.
    pub fn error(&self) -> Option<&EaselError> {
        match self {
            Self::Complete(_) => None,
            Self::Errored { error, .. } => Some(error),
        }
    }

    /// Final state of the run.
    pub fn state(&self) -> AssemblyState {
        match self {
            Self::Complete(_) => AssemblyState::Complete,
            Self::Errored { .. } => AssemblyState::Errored,
        }
    }

    /// Convert to a result, dropping partial slides on failure.
    ///
    /// # Errors
    ///
    /// Returns the failure of an `Errored` run.
    pub fn into_result(self) -> EaselResult<Vec<Slide>> {
        match self {
            Self::Complete(slides) => Ok(slides),
            Self::Errored { error, .. } => Err(error),
        }
    }
}

/// Turns slide structures into illustrated slides, one image request at a time.
pub struct SlideAssembler<'a, D: ?Sized> {
    driver: &'a D,
    model: &'a str,
    images: &'a ImagesConfig,
    progress: Option<&'a UnboundedSender<AssemblyEvent>>,
}

impl<'a, D: ImageGeneration + ?Sized> SlideAssembler<'a, D> {
    /// Create an assembler that illustrates with `model`.
    pub fn new(driver: &'a D, model: &'a str, images: &'a ImagesConfig) -> Self {
        Self {
            driver,
            model,
            images,
            progress: None,
        }
    }

    /// Publish progress events to `progress`.
    pub fn with_progress(mut self, progress: &'a UnboundedSender<AssemblyEvent>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Illustrate every structure in order.
    ///
    /// Stops at the first failed image request or at cancellation; slides
    /// finished before that are kept in the outcome.
    #[instrument(skip_all, fields(count = structures.len(), model = %self.model))]
    pub async fn assemble(
        &self,
        structures: Vec<SlideStructure>,
        cancel: &CancellationToken,
    ) -> AssemblyOutcome {
        let mut slides = Vec::with_capacity(structures.len());

        for (index, structure) in structures.into_iter().enumerate() {
            self.publish(AssemblyEvent::StateChanged(AssemblyState::GeneratingSlide(
                index,
            )));
            debug!(index, title = %structure.title, "Illustrating slide");

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(EaselError::from(JobError::new(JobErrorKind::Cancelled))),
                result = self.illustrate(&structure) => result,
            };

            match result {
                Ok(image_url) => {
                    slides.push(Slide::from_structure(structure, image_url));
                    self.publish(AssemblyEvent::SlideCompleted {
                        index,
                        slides: slides.clone(),
                    });
                }
                Err(e) => {
                    error!(index, error = %e, "Slide illustration failed, stopping run");
                    self.publish(AssemblyEvent::StateChanged(AssemblyState::Errored));
                    return AssemblyOutcome::Errored {
                        completed: slides,
                        failed_index: index,
                        error: e,
                    };
                }
            }
        }

        info!(count = slides.len(), "All slides illustrated");
        self.publish(AssemblyEvent::StateChanged(AssemblyState::Complete));
        AssemblyOutcome::Complete(slides)
    }

    /// Request the illustration for one slide, returned as a data URL.
    ///
    /// # Errors
    ///
    /// Propagates the image request failure, or `EmptyResponse` when the
    /// service returned no image.
    pub async fn illustrate(&self, structure: &SlideStructure) -> EaselResult<String> {
        let prompt = prompts::slide_image_prompt(
            &structure.image_prompt,
            &structure.title,
            &structure.content_summary(),
            self.images.theme.as_deref(),
        );
        let request = ImageRequest {
            model: self.model.to_string(),
            prompt,
            number_of_images: 1,
            output_mime_type: self.images.output_mime_type.clone(),
            aspect_ratio: self.images.aspect_ratio,
        };
        first_image_url(self.driver, &request).await
    }

    fn publish(&self, event: AssemblyEvent) {
        if let Some(progress) = self.progress {
            // A dropped receiver only means nobody is watching.
            let _ = progress.send(event);
        }
    }
}

/// Run an image request and return its first image as a data URL.
pub(crate) async fn first_image_url<D: ImageGeneration + ?Sized>(
    driver: &D,
    request: &ImageRequest,
) -> EaselResult<String> {
    let response = driver.generate_images(request).await?;
    response
        .images
        .first()
        .map(|image| image.to_data_url())
        .ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::EmptyResponse(
                "Image generation failed to return an image.".to_string(),
            ))
            .into()
        })
}
