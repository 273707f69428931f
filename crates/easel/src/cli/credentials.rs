//! Credential checks and failure reporting.

use easel::{CredentialSelector, EaselError, EnvCredentials};

/// Report whether an API key is available, offering to reload it if not.
pub async fn check_key(credentials: &EnvCredentials) -> Result<(), Box<dyn std::error::Error>> {
    if credentials.has_selected_api_key().await {
        println!("✓ API key found");
        return Ok(());
    }

    println!("No API key found in {}", credentials.vars().join(" or "));
    credentials.open_select_key().await?;
    println!("✓ API key loaded from environment file");
    Ok(())
}

/// Print a failure the way the user should see it.
///
/// Credential failures trigger a key reload so the next command picks up a
/// corrected key.
pub async fn report_failure(error: &(dyn std::error::Error + 'static), credentials: &EnvCredentials) {
    let Some(error) = error.downcast_ref::<EaselError>() else {
        eprintln!("✗ {}", error);
        return;
    };

    tracing::debug!(error = %error, kind = %error.failure_kind(), "Command failed");
    eprintln!("✗ {}", error.user_message());

    if error.is_credential_failure() {
        eprintln!(
            "  Set {} in your environment or a .env file, then run the command again.",
            credentials.vars().join(" or ")
        );
        if credentials.open_select_key().await.is_ok() {
            eprintln!("  A key is now available.");
        }
    }
}
