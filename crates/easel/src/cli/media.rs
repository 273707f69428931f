//! Standalone image, edit, and video commands.

use easel::{
    AspectRatio, EaselConfig, GeminiClient, ImageRef, ManifestExporter, PresentationExporter,
    PresentationStudio, VideoAspectRatio,
};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// Generate one image and write it to disk.
pub async fn run_image(
    prompt: String,
    aspect_ratio: String,
    out: Option<PathBuf>,
    config: EaselConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let aspect_ratio = AspectRatio::parse(&aspect_ratio)?;
    let studio = PresentationStudio::new(GeminiClient::new()?, config);

    let url = studio.generate_image(&prompt, aspect_ratio).await?;
    let image = ImageRef::parse(&url)?;
    let path = out.unwrap_or_else(|| PathBuf::from(format!("image.{}", image.file_extension())));
    std::fs::write(&path, image.decode()?)?;

    println!("✓ Wrote {}", path.display());
    Ok(())
}

/// Edit a standalone image file or one slide of an exported presentation.
pub async fn run_edit(
    instruction: String,
    input: Option<PathBuf>,
    manifest: Option<PathBuf>,
    slide: Option<usize>,
    out: Option<PathBuf>,
    config: EaselConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let studio = PresentationStudio::new(GeminiClient::new()?, config);

    if let (Some(dir), Some(number)) = (manifest, slide) {
        let exporter = ManifestExporter::new(dir);
        let slides = exporter.load()?;
        let index = number.checked_sub(1).ok_or("Slide numbers start at 1")?;

        let slides = studio.edit_slide(&slides, index, &instruction).await?;
        let artifact = exporter.export(&slides)?;
        println!("✓ Updated slide {} in {}", number, artifact.path.display());
        return Ok(());
    }

    let input = input.ok_or("Provide --input or --manifest with --slide")?;
    let source = read_image(&input)?;
    let url = studio.edit_image(&source.to_data_url(), &instruction).await?;
    let edited = ImageRef::parse(&url)?;

    let path = out.unwrap_or_else(|| edited_path(&input, edited.file_extension()));
    std::fs::write(&path, edited.decode()?)?;
    println!("✓ Wrote {}", path.display());
    Ok(())
}

/// Generate a video, optionally seeded with an image, and write it to disk.
pub async fn run_video(
    prompt: String,
    aspect_ratio: String,
    image: Option<PathBuf>,
    out: PathBuf,
    config: EaselConfig,
    cancel: CancellationToken,
) -> Result<(), Box<dyn std::error::Error>> {
    let aspect_ratio = VideoAspectRatio::parse(&aspect_ratio)?;
    let seed = image.as_deref().map(read_image).transpose()?;
    let studio = PresentationStudio::new(GeminiClient::new()?, config);

    println!("Generating video, this can take a few minutes...");
    let video = studio
        .video_job()
        .run(&prompt, aspect_ratio, seed, &cancel)
        .await?;

    std::fs::write(&out, &video.bytes)?;
    println!("✓ Wrote {} ({} bytes)", out.display(), video.bytes.len());
    Ok(())
}

fn read_image(path: &Path) -> Result<ImageRef, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    Ok(ImageRef::from_bytes(mime_for(path), &bytes))
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

fn edited_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    input.with_file_name(format!("{}-edited.{}", stem, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for(Path::new("a.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("noext")), "image/jpeg");
    }

    #[test]
    fn test_edited_path_keeps_directory() {
        let path = edited_path(Path::new("shots/cat.jpg"), "png");
        assert_eq!(path, PathBuf::from("shots/cat-edited.png"));
    }
}
