use crate::config::PresentationConfig;
use crate::metadata::{PresentationMetadata, QrCodeData, QrResponse, VisualParameters};
use crate::palette::{pattern_complexity, tier_color};
use nexus_codec::ValidationError;
use thiserror::Error;

/// A key that failed validation, wrapped with the decode error that stopped it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid membership key: {source}")]
pub struct PresentationError {
    #[source]
    pub source: ValidationError,
}

impl PresentationError {
    pub const MESSAGE: &'static str = "Invalid membership key";

    pub fn code(&self) -> &'static str {
        self.source.code()
    }

    /// Message of the underlying decode error.
    pub fn details(&self) -> String {
        self.source.to_string()
    }
}

/// Maps validated keys onto QR presentation metadata.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    config: PresentationConfig,
}

impl Presenter {
    pub fn new(config: PresentationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Validate `key` and derive its presentation metadata.
    ///
    /// `user_data` is accepted for forward compatibility and currently unused.
    pub fn describe(
        &self,
        key: &str,
        _user_data: Option<&serde_json::Value>,
    ) -> Result<PresentationMetadata, PresentationError> {
        let identity =
            nexus_codec::decode(key).map_err(|source| PresentationError { source })?;

        let tier_name = identity.tier_name().to_string();
        let tier_level = identity.tier_level();
        let main_color = tier_color(&tier_name)
            .map(str::to_string)
            .unwrap_or_else(|| self.config.fallback_color.clone());

        tracing::debug!(tier = %tier_name, "described membership key");

        Ok(PresentationMetadata {
            qr_code_data: QrCodeData {
                membership_key: key.to_string(),
                validation_url: format!("{}{}", self.config.validation_base_url, key),
                tier: tier_name.clone(),
            },
            visual_parameters: VisualParameters {
                style: tier_name.to_lowercase(),
                main_color,
                pattern_complexity: pattern_complexity(tier_level),
                tier_level,
            },
            tier_name,
            tier_level,
        })
    }

    /// Like [`Presenter::describe`], folded into a single serializable result.
    pub fn respond(&self, key: &str, user_data: Option<&serde_json::Value>) -> QrResponse {
        match self.describe(key, user_data) {
            Ok(metadata) => QrResponse {
                success: true,
                error: None,
                code: None,
                details: None,
                metadata: Some(metadata),
            },
            Err(err) => QrResponse {
                success: false,
                error: Some(PresentationError::MESSAGE.to_string()),
                code: Some(err.code()),
                details: Some(err.details()),
                metadata: None,
            },
        }
    }
}

/// Describe a key with the default configuration.
pub fn describe(key: &str) -> Result<PresentationMetadata, PresentationError> {
    Presenter::default().describe(key, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GODFATHER_KEY: &str = "GOD4E4∞CQ7X#∞1830F∞K2P!AS∞33";

    #[test]
    fn test_error_passes_decode_failure_through() {
        let err = describe("garbage-not-a-key").unwrap_err();
        assert_eq!(err.source, ValidationError::UnknownKeyFormat);
        assert_eq!(err.details(), "Unknown key format");
        assert_eq!(
            err.to_string(),
            "Invalid membership key: Unknown key format"
        );
    }

    #[test]
    fn test_configured_base_url() {
        let presenter = Presenter::new(PresentationConfig {
            validation_base_url: "https://example.test/v/".to_string(),
            ..PresentationConfig::default()
        });
        let metadata = presenter.describe(GODFATHER_KEY, None).unwrap();
        assert_eq!(
            metadata.qr_code_data.validation_url,
            format!("https://example.test/v/{}", GODFATHER_KEY)
        );
    }

    #[test]
    fn test_user_data_is_ignored() {
        let presenter = Presenter::default();
        let extra = serde_json::json!({"theme": "dark"});
        assert_eq!(
            presenter.describe(GODFATHER_KEY, Some(&extra)),
            presenter.describe(GODFATHER_KEY, None)
        );
    }
}
