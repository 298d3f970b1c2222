use crate::checksum::checksum;
use crate::hash::user_hash_fragment;
use crate::pattern::{seed_text, unique_pattern};
use crate::personal::personal_element;
use crate::segments::KeySegments;
use crate::signature::{tier_identifier, time_signature};
use crate::EncodeError;
use chrono::{DateTime, Utc};
use nexus_types::{KeyAttributes, Tier};

/// Issue a membership key.
///
/// `tier_name` is matched case-insensitively against the tier table. The
/// result is a pure function of the arguments: the same id, tier, instant and
/// attributes always produce the same key.
pub fn encode(
    user_id: &str,
    tier_name: &str,
    registered_at: &DateTime<Utc>,
    attributes: Option<&KeyAttributes>,
) -> Result<String, EncodeError> {
    let tier =
        Tier::from_name(tier_name).ok_or_else(|| EncodeError::UnknownTier(tier_name.to_string()))?;
    Ok(encode_for_tier(user_id, tier, registered_at, attributes))
}

pub fn encode_for_tier(
    user_id: &str,
    tier: Tier,
    registered_at: &DateTime<Utc>,
    attributes: Option<&KeyAttributes>,
) -> String {
    let fragment = user_hash_fragment(user_id);
    let pattern = unique_pattern(&seed_text(user_id, registered_at));

    let mut segments = KeySegments {
        tier,
        a: format!("{}{}", tier.prefix(), &fragment[..3]),
        b: format!("{}{}", tier_identifier(tier), &pattern[..4]),
        c: time_signature(&registered_at.date_naive()),
        d: pattern[4..8].to_string(),
        personal: personal_element(attributes, &fragment),
        checksum: String::new(),
    };
    segments.checksum = checksum(&segments.body());

    tracing::trace!(?segments, "assembled key segments");
    tracing::debug!(tier = %tier, fragment = %fragment, "issued membership key");

    segments.to_string()
}
