//! Instruction-driven image edits.

use easel_core::{ImageRef, Slide};
use easel_error::{
    EaselResult, GeminiError, GeminiErrorKind, ValidationError, ValidationErrorKind,
};
use easel_interface::ImageEditing;
use tracing::{debug, instrument};

/// Apply `instruction` to an embedded image, returning the new image as a data URL.
///
/// The source MIME type is read from the data URL, defaulting to `image/jpeg`.
///
/// # Errors
///
/// - `EmptyEditInstruction` if the instruction is blank
/// - `InvalidImageReference` if `image_url` is not a base64 data URL
/// - `EmptyResponse` if the service returned no image
#[instrument(skip(driver, image_url), fields(model = %model))]
pub async fn edit_image<D: ImageEditing + ?Sized>(
    driver: &D,
    model: &str,
    image_url: &str,
    instruction: &str,
) -> EaselResult<String> {
    if instruction.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyEditInstruction).into());
    }
    let image = ImageRef::parse(image_url)?;

    let response = driver.edit_image(model, &image, instruction).await?;
    let edited = response.images.into_iter().next().ok_or_else(|| {
        GeminiError::new(GeminiErrorKind::EmptyResponse(
            "Image edit failed to return a new image.".to_string(),
        ))
    })?;

    debug!(mime_type = edited.mime_type(), "Image edited");
    Ok(edited.to_data_url())
}

/// Replace the image of the slide at `index`.
///
/// Returns a new collection in which only that slide differs. On failure the
/// caller's collection is untouched, since it is only borrowed.
///
/// # Errors
///
/// - `EmptyEditInstruction` if the instruction is blank
/// - `SlideIndexOutOfRange` if `index` is past the end
/// - any error from [`edit_image`]
#[instrument(skip(driver, slides), fields(model = %model, len = slides.len()))]
pub async fn edit_slide<D: ImageEditing + ?Sized>(
    driver: &D,
    model: &str,
    slides: &[Slide],
    index: usize,
    instruction: &str,
) -> EaselResult<Vec<Slide>> {
    if instruction.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyEditInstruction).into());
    }
    let target = slides.get(index).ok_or_else(|| {
        ValidationError::new(ValidationErrorKind::SlideIndexOutOfRange {
            index,
            len: slides.len(),
        })
    })?;

    let image_url = edit_image(driver, model, &target.image_url, instruction).await?;

    Ok(slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            if i == index {
                slide.with_image(image_url.clone())
            } else {
                slide.clone()
            }
        })
        .collect())
}
