//! Environment-backed credential selection.

use async_trait::async_trait;
use easel_error::{EaselResult, GeminiError, GeminiErrorKind};
use easel_interface::CredentialSelector;
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// Credential selector reading API keys from the environment.
///
/// Selecting a key reloads the `.env` file, overriding stale values, so a key
/// fixed on disk takes effect without restarting.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    vars: Vec<String>,
    env_file: Option<PathBuf>,
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(easel_models::API_KEY_VARS)
    }
}

impl EnvCredentials {
    /// Check `vars` in order.
    pub fn new<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(Into::into).collect(),
            env_file: None,
        }
    }

    /// Reload from this file instead of the nearest `.env`.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Variables checked, in order.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    /// The first non-empty key, if any.
    pub fn selected_key(&self) -> Option<String> {
        self.vars
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
    }
}

#[async_trait]
impl CredentialSelector for EnvCredentials {
    async fn has_selected_api_key(&self) -> bool {
        self.selected_key().is_some()
    }

    #[instrument(skip(self))]
    async fn open_select_key(&self) -> EaselResult<()> {
        let loaded = match &self.env_file {
            Some(path) => dotenvy::from_path_override(path).map(|_| path.clone()),
            None => dotenvy::dotenv_override(),
        };
        match loaded {
            Ok(path) => debug!(path = %path.display(), "Reloaded environment file"),
            Err(e) => warn!(error = %e, "No environment file reloaded"),
        }

        if self.selected_key().is_some() {
            Ok(())
        } else {
            Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into())
        }
    }
}
