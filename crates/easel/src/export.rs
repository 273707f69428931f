//! Directory export: a JSON manifest plus one image file per slide.

use chrono::{DateTime, Utc};
use easel_core::{ImageRef, Slide, Source};
use easel_error::{EaselError, EaselResult, ExportError, JsonError};
use easel_interface::{ExportArtifact, PresentationExporter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Manifest file name inside an export directory.
pub const MANIFEST_FILE: &str = "presentation.json";

const SLIDE_FILE_PREFIX: &str = "slide-";

/// Manifest entry for one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSlide {
    /// Slide title
    pub title: String,
    /// Bullet points
    pub content: Vec<String>,
    /// Image file next to the manifest, for embedded images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_file: Option<String>,
    /// MIME type of `image_file`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_mime_type: Option<String>,
    /// Original link, for images that were not embedded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Citations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

/// Contents of `presentation.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// When the export was written
    pub generated_at: DateTime<Utc>,
    /// Slides, in presentation order
    pub slides: Vec<ManifestSlide>,
}

/// Writes presentations as a directory of images and a manifest.
///
/// Re-exporting into a directory replaces the `slide-*` images of the
/// previous export.
///
/// # Example
///
/// ```no_run
/// use easel::{ManifestExporter, PresentationExporter};
///
/// # fn example(slides: &[easel::Slide]) -> Result<(), Box<dyn std::error::Error>> {
/// let artifact = ManifestExporter::new("out").export(slides)?;
/// println!("Wrote {}", artifact.path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ManifestExporter {
    dir: PathBuf,
}

impl ManifestExporter {
    /// Export into `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    /// Read a previous export back into slides.
    ///
    /// Image files are re-embedded as data URLs.
    ///
    /// # Errors
    ///
    /// Returns an export error if the manifest or an image file cannot be read.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn load(&self) -> EaselResult<Vec<Slide>> {
        let path = self.manifest_path();
        let raw = fs::read_to_string(&path).map_err(|e| {
            ExportError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let manifest: Manifest = serde_json::from_str(&raw).map_err(JsonError::from)?;

        manifest
            .slides
            .into_iter()
            .map(|entry| -> EaselResult<Slide> {
                let image_url = match (&entry.image_file, &entry.image_url) {
                    (Some(file), _) => {
                        let bytes = fs::read(self.dir.join(file)).map_err(|e| {
                            ExportError::new(format!("Failed to read image {}: {}", file, e))
                        })?;
                        let mime = entry.image_mime_type.as_deref().unwrap_or("image/jpeg");
                        ImageRef::from_bytes(mime, &bytes).to_data_url()
                    }
                    (None, Some(url)) => url.clone(),
                    (None, None) => {
                        return Err(EaselError::from(ExportError::new(format!(
                            "Slide '{}' has no image",
                            entry.title
                        ))));
                    }
                };
                Ok(Slide {
                    title: entry.title,
                    content: entry.content,
                    image_url,
                    sources: entry.sources,
                })
            })
            .collect()
    }

    /// Delete `slide-*` images left by an earlier export.
    fn remove_stale_images(&self) -> EaselResult<()> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            ExportError::new(format!("Failed to list {}: {}", self.dir.display(), e))
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            let stale = path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(SLIDE_FILE_PREFIX));
            if stale {
                fs::remove_file(&path).map_err(|e| {
                    ExportError::new(format!("Failed to remove {}: {}", path.display(), e))
                })?;
                debug!(file = %path.display(), "Removed stale slide image");
            }
        }
        Ok(())
    }

    fn write_image(&self, index: usize, slide: &Slide) -> EaselResult<ManifestSlide> {
        let mut entry = ManifestSlide {
            title: slide.title.clone(),
            content: slide.content.clone(),
            image_file: None,
            image_mime_type: None,
            image_url: None,
            sources: slide.sources.clone(),
        };

        if !slide.image_url.starts_with("data:") {
            entry.image_url = Some(slide.image_url.clone());
            return Ok(entry);
        }

        let image = ImageRef::parse(&slide.image_url)?;
        let name = format!("{}{:02}.{}", SLIDE_FILE_PREFIX, index + 1, image.file_extension());
        fs::write(self.dir.join(&name), image.decode()?)
            .map_err(|e| ExportError::new(format!("Failed to write {}: {}", name, e)))?;
        debug!(file = %name, "Wrote slide image");

        entry.image_mime_type = Some(image.mime_type().to_string());
        entry.image_file = Some(name);
        Ok(entry)
    }
}

impl PresentationExporter for ManifestExporter {
    #[instrument(skip(self, slides), fields(dir = %self.dir.display(), count = slides.len()))]
    fn export(&self, slides: &[Slide]) -> EaselResult<ExportArtifact> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            ExportError::new(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;
        self.remove_stale_images()?;

        let entries = slides
            .iter()
            .enumerate()
            .map(|(index, slide)| self.write_image(index, slide))
            .collect::<EaselResult<Vec<_>>>()?;

        let manifest = Manifest {
            generated_at: Utc::now(),
            slides: entries,
        };
        let path = self.manifest_path();
        let json = serde_json::to_string_pretty(&manifest).map_err(JsonError::from)?;
        fs::write(&path, json)
            .map_err(|e| ExportError::new(format!("Failed to write {}: {}", path.display(), e)))?;

        info!(path = %path.display(), "Presentation exported");
        Ok(ExportArtifact {
            path,
            slide_count: slides.len(),
        })
    }
}
