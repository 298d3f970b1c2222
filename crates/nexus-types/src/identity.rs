use crate::Tier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional display attributes supplied when a key is issued.
///
/// Only `name` is recognized; any other field in the incoming mapping is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl KeyAttributes {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Build attributes from an arbitrary JSON mapping such as `{"name": "Alice Smith"}`.
    pub fn from_value(value: &serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value.clone())
    }
}

/// Fields recovered from a validated membership key.
///
/// `user_id` is NOT the id the key was issued for. Keys only carry the first
/// three hex digits of a one-way digest of that id, so decoding can offer no
/// more than a placeholder of the form `user_<fragment>`. Never use it to look
/// up an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIdentity {
    pub tier: Tier,
    pub user_id: String,
    /// `None` when the time signature does not form a real calendar date.
    pub registration_date: Option<NaiveDate>,
    pub personal_element: String,
}

impl DecodedIdentity {
    pub fn tier_name(&self) -> &'static str {
        self.tier.name()
    }

    pub fn tier_level(&self) -> u8 {
        self.tier.rank()
    }
}
