//! Layered configuration for the presentation pipeline.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from easel.toml)
//! - User overrides (./easel.toml or ~/.config/easel/easel.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use easel_core::AspectRatio;
use easel_error::{ConfigError, EaselError, EaselResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Model identifiers for each remote operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Default outline model (topic mode without extended reasoning)
    pub outline: String,
    /// Higher-capability model for script parsing and extended reasoning
    pub reasoning: String,
    /// Retrieval-grounded outline model
    pub search: String,
    /// Slide illustrations and standalone images
    pub image: String,
    /// Instruction-driven image edits
    pub edit: String,
    /// Video generation
    pub video: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            outline: "gemini-2.5-flash".to_string(),
            reasoning: "gemini-2.5-pro".to_string(),
            search: "gemini-2.5-flash".to_string(),
            image: "imagen-4.0-generate-001".to_string(),
            edit: "gemini-2.5-flash-image".to_string(),
            video: "veo-3.1-fast-generate-preview".to_string(),
        }
    }
}

/// Outline request options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Reasoning token budget when extended thinking is requested
    pub thinking_budget: u32,
    /// Language of pre-written scripts, named in the script formatter prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_language: Option<String>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            thinking_budget: 32768,
            script_language: None,
        }
    }
}

/// Slide illustration options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Output MIME type requested from the image service
    pub output_mime_type: String,
    /// Aspect ratio of slide illustrations
    pub aspect_ratio: AspectRatio,
    /// Visual theme appended to every slide illustration prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            output_mime_type: "image/jpeg".to_string(),
            aspect_ratio: AspectRatio::Widescreen,
            theme: None,
        }
    }
}

/// Video job options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Output resolution
    pub resolution: String,
    /// Seconds between status polls
    pub poll_interval_secs: u64,
    /// Polls before the job is reported as timed out
    pub max_poll_attempts: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            resolution: "720p".to_string(),
            poll_interval_secs: 5,
            max_poll_attempts: 120,
        }
    }
}

impl VideoConfig {
    /// Delay between status polls.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Top-level Easel configuration.
///
/// Loads from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from easel.toml)
/// 2. User override (~/.config/easel/easel.toml, then ./easel.toml)
///
/// # Example
///
/// ```no_run
/// use easel_presentation::EaselConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = EaselConfig::load()?;
/// println!("Slides are illustrated with {}", config.models.image);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct EaselConfig {
    /// Model identifiers
    #[serde(default)]
    pub models: ModelsConfig,
    /// Outline request options
    #[serde(default)]
    pub outline: OutlineConfig,
    /// Slide illustration options
    #[serde(default)]
    pub images: ImagesConfig,
    /// Video job options
    #[serde(default)]
    pub video: VideoConfig,
}

impl EaselConfig {
    /// Load configuration from a specific file path.
    ///
    /// Values missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> EaselResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                EaselError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                EaselError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (easel.toml shipped with the library)
    /// 2. User config in home directory (~/.config/easel/easel.toml)
    /// 3. User config in current directory (./easel.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> EaselResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../easel.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/easel/easel.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("easel").required(false));

        builder
            .build()
            .map_err(|e| {
                EaselError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                EaselError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// The bundled defaults alone, without user overrides.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    pub fn bundled() -> EaselResult<Self> {
        const DEFAULT_CONFIG: &str = include_str!("../../../easel.toml");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| {
                EaselError::from(ConfigError::new(format!(
                    "Failed to parse bundled configuration: {}",
                    e
                )))
            })
    }
}
