// Tests for configuration loading.

use easel_core::AspectRatio;
use easel_error::FailureKind;
use easel_presentation::EaselConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_bundled_defaults_match_built_in_defaults() -> anyhow::Result<()> {
    let bundled = EaselConfig::bundled()?;
    assert_eq!(bundled, EaselConfig::default());
    assert_eq!(bundled.models.image, "imagen-4.0-generate-001");
    assert_eq!(bundled.video.poll_interval(), Duration::from_secs(5));
    assert_eq!(bundled.video.max_poll_attempts, 120);
    Ok(())
}

#[test]
fn test_partial_file_keeps_other_defaults() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        r#"
[models]
image = "imagen-custom"

[images]
aspect_ratio = "4:3"
theme = "Mid-century travel posters"

[outline]
script_language = "Amharic"
"#
    )?;

    let config = EaselConfig::from_file(file.path())?;
    assert_eq!(config.models.image, "imagen-custom");
    assert_eq!(config.models.outline, "gemini-2.5-flash");
    assert_eq!(config.images.aspect_ratio, AspectRatio::Standard);
    assert_eq!(
        config.images.theme.as_deref(),
        Some("Mid-century travel posters")
    );
    assert_eq!(config.outline.script_language.as_deref(), Some("Amharic"));
    assert_eq!(config.outline.thinking_budget, 32768);
    assert_eq!(config.video.resolution, "720p");
    Ok(())
}

#[test]
fn test_invalid_file_is_config_error() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[video]\nmax_poll_attempts = \"many\"")?;

    let err = EaselConfig::from_file(file.path()).expect_err("bad value should fail");
    assert_eq!(err.failure_kind(), FailureKind::Local);
    assert!(err.user_message().starts_with("Configuration problem"));
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let err = EaselConfig::from_file("/nonexistent/easel.toml").expect_err("missing file");
    assert_eq!(err.failure_kind(), FailureKind::Local);
}
