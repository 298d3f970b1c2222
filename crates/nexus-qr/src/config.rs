use crate::palette::FALLBACK_COLOR;
use serde::{Deserialize, Serialize};

pub const DEFAULT_VALIDATION_BASE_URL: &str = "https://nexus.io/validate/";

/// Settings for the presentation adapter, loaded from the `[presentation]`
/// table of the CLI config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Prepended verbatim to the key to form the validation URL.
    pub validation_base_url: String,
    /// Main color for tier names outside the built-in palette.
    pub fallback_color: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            validation_base_url: DEFAULT_VALIDATION_BASE_URL.to_string(),
            fallback_color: FALLBACK_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config: PresentationConfig =
            toml::from_str(r#"validation_base_url = "https://example.test/v/""#).unwrap();
        assert_eq!(config.validation_base_url, "https://example.test/v/");
        assert_eq!(config.fallback_color, FALLBACK_COLOR);
    }

    #[test]
    fn test_empty_table_is_default() {
        let config: PresentationConfig = toml::from_str("").unwrap();
        assert_eq!(config, PresentationConfig::default());
    }
}
