use crate::{decode, ValidationError};
use chrono::NaiveDate;
use nexus_types::DecodedIdentity;
use serde::Serialize;

/// Non-throwing validation result: callers branch on `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub identity: Option<IdentityFields>,
}

/// Flat, serializable view of a [`DecodedIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityFields {
    pub user_id: String,
    pub tier_name: String,
    pub tier_level: u8,
    pub registration_date: Option<NaiveDate>,
    pub personal_element: String,
}

impl From<&DecodedIdentity> for IdentityFields {
    fn from(identity: &DecodedIdentity) -> Self {
        Self {
            user_id: identity.user_id.clone(),
            tier_name: identity.tier_name().to_string(),
            tier_level: identity.tier_level(),
            registration_date: identity.registration_date,
            personal_element: identity.personal_element.clone(),
        }
    }
}

impl From<Result<DecodedIdentity, ValidationError>> for ValidationReport {
    fn from(result: Result<DecodedIdentity, ValidationError>) -> Self {
        match result {
            Ok(identity) => Self {
                valid: true,
                code: None,
                error: None,
                identity: Some(IdentityFields::from(&identity)),
            },
            Err(err) => Self {
                valid: false,
                code: Some(err.code()),
                error: Some(err.to_string()),
                identity: None,
            },
        }
    }
}

/// Decode a key into a report instead of a `Result`.
pub fn validate(key: &str) -> ValidationReport {
    ValidationReport::from(decode(key))
}
