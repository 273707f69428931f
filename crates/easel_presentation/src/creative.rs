//! Standalone image and video tools.

use crate::VideoConfig;
use crate::assembly::first_image_url;
use easel_core::{AspectRatio, ImageRef, ImageRequest, VideoAsset, VideoAspectRatio, VideoRequest};
use easel_error::{
    EaselError, EaselResult, JobError, JobErrorKind, ValidationError, ValidationErrorKind,
};
use easel_interface::{ImageGeneration, VideoGeneration};
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

/// MIME type of downloaded videos.
pub const VIDEO_MIME_TYPE: &str = "video/mp4";

/// Generate one image from a free-form prompt, returned as a data URL.
///
/// # Errors
///
/// - `EmptyPrompt` if the prompt is blank
/// - the image request failure, or `EmptyResponse` when no image came back
#[instrument(skip(driver, prompt), fields(model = %model, %aspect_ratio))]
pub async fn generate_standalone_image<D: ImageGeneration + ?Sized>(
    driver: &D,
    model: &str,
    output_mime_type: &str,
    prompt: &str,
    aspect_ratio: AspectRatio,
) -> EaselResult<String> {
    if prompt.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyPrompt).into());
    }

    let request = ImageRequest {
        model: model.to_string(),
        prompt: prompt.to_string(),
        number_of_images: 1,
        output_mime_type: output_mime_type.to_string(),
        aspect_ratio,
    };
    first_image_url(driver, &request).await
}

/// A bounded, cancellable video generation job.
///
/// Starts the job, polls it at a fixed interval until it reports done, then
/// downloads the first video. Each wait and remote call races the
/// cancellation token.
pub struct VideoJob<'a, D: ?Sized> {
    driver: &'a D,
    model: String,
    resolution: String,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl<'a, D: VideoGeneration + ?Sized> VideoJob<'a, D> {
    /// Create a job using `model` and the polling options in `config`.
    pub fn new(driver: &'a D, model: impl Into<String>, config: &VideoConfig) -> Self {
        Self {
            driver,
            model: model.into(),
            resolution: config.resolution.clone(),
            poll_interval: config.poll_interval(),
            max_poll_attempts: config.max_poll_attempts,
        }
    }

    /// Run the job to completion.
    ///
    /// # Errors
    ///
    /// - `EmptyPrompt` if the prompt is blank
    /// - `Cancelled` if `cancel` fires at any suspension point
    /// - `TimedOut` after `max_poll_attempts` polls without completion
    /// - `MissingDownloadLink` if the finished job names no video
    /// - any remote failure from starting, polling, or downloading
    #[instrument(skip(self, prompt, image, cancel), fields(model = %self.model, %aspect_ratio))]
    pub async fn run(
        &self,
        prompt: &str,
        aspect_ratio: VideoAspectRatio,
        image: Option<ImageRef>,
        cancel: &CancellationToken,
    ) -> EaselResult<VideoAsset> {
        if prompt.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyPrompt).into());
        }

        let request = VideoRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            number_of_videos: 1,
            resolution: self.resolution.clone(),
            aspect_ratio,
            image,
        };

        let mut operation = cancellable(cancel, self.driver.start_video(&request)).await?;
        info!(operation = %operation.name, "Video job started");

        let mut attempts = 0u32;
        while !operation.done {
            if attempts >= self.max_poll_attempts {
                return Err(JobError::new(JobErrorKind::TimedOut {
                    attempts,
                    waited_secs: self.poll_interval.as_secs() * u64::from(attempts),
                })
                .into());
            }

            cancellable(cancel, async {
                tokio::time::sleep(self.poll_interval).await;
                Ok::<(), EaselError>(())
            })
            .await?;

            operation = cancellable(cancel, self.driver.poll_video(&operation)).await?;
            attempts += 1;
            debug!(attempts, done = operation.done, "Polled video job");
        }

        let uri = operation
            .first_video_uri()
            .ok_or_else(|| JobError::new(JobErrorKind::MissingDownloadLink))?;
        let bytes = cancellable(cancel, self.driver.download_video(uri)).await?;

        info!(bytes = bytes.len(), attempts, "Video job finished");
        Ok(VideoAsset {
            mime_type: VIDEO_MIME_TYPE.to_string(),
            bytes,
        })
    }
}

/// Race `future` against the cancellation token.
async fn cancellable<T>(
    cancel: &CancellationToken,
    future: impl Future<Output = EaselResult<T>>,
) -> EaselResult<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(EaselError::from(JobError::new(JobErrorKind::Cancelled))),
        result = future => result,
    }
}
