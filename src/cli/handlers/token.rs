//! Token command handler
//!
//! Issues bearer tokens for API callers. There is no login endpoint, so
//! tokens are handed out through this command when auth is enabled.

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::utils::jwt::generate_token;

/// Handler for the token command
pub struct TokenCommandHandler {
    config: Settings,
}

impl TokenCommandHandler {
    /// Create a new token command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the token command
    ///
    /// Signs a JWT for the subject with the configured auth secret and
    /// prints it to stdout, one token per line, so it can be piped into
    /// scripts or curl invocations.
    ///
    /// # Arguments
    /// * `subject` - The caller the token identifies
    /// * `expires_in_hours` - Optional override for the configured expiration
    ///
    /// # Errors
    /// - Missing auth secret
    /// - Non-positive expiration
    /// - Token signing errors
    pub async fn execute(&self, subject: &str, expires_in_hours: Option<i64>) -> AppResult<()> {
        if self.config.auth.secret.is_empty() {
            return Err(AppError::Validation {
                field: "auth.secret".to_string(),
                reason: "Auth secret must be configured to issue tokens".to_string(),
            });
        }

        let hours = expires_in_hours.unwrap_or(self.config.auth.token_expiration_hours);
        if hours <= 0 {
            return Err(AppError::Validation {
                field: "expires_in_hours".to_string(),
                reason: "Token expiration must be positive".to_string(),
            });
        }

        let token = generate_token(subject.to_string(), &self.config.auth.secret, hours)?;
        println!("{}", token);

        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::validate_token;

    fn config_with_secret() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/tidyhub_test".to_string();
        config.auth.secret = "test_secret_key_at_least_32_characters_long".to_string();
        config
    }

    #[tokio::test]
    async fn test_token_handler_issues_valid_token() {
        let config = config_with_secret();
        let handler = TokenCommandHandler::new(config.clone());

        let result = handler.execute("client-17", None).await;
        assert!(result.is_ok());

        // The same secret must accept a freshly issued token
        let token = generate_token(
            "client-17".to_string(),
            &config.auth.secret,
            config.auth.token_expiration_hours,
        )
        .unwrap();
        let claims = validate_token(&token, &config.auth.secret).unwrap();
        assert_eq!(claims.sub, "client-17");
    }

    #[tokio::test]
    async fn test_token_handler_requires_secret() {
        let mut config = config_with_secret();
        config.auth.secret = String::new();
        let handler = TokenCommandHandler::new(config);

        let result = handler.execute("client-17", None).await;
        assert!(result.is_err());

        if let Err(AppError::Validation { field, .. }) = result {
            assert_eq!(field, "auth.secret");
        } else {
            panic!("Expected validation error for missing secret");
        }
    }

    #[tokio::test]
    async fn test_token_handler_rejects_non_positive_expiration() {
        let config = config_with_secret();
        let handler = TokenCommandHandler::new(config);

        let result = handler.execute("client-17", Some(0)).await;
        assert!(result.is_err());
    }
}
