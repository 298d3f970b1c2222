use crate::checksum::checksum;
use crate::segments::parse_segments;
use crate::signature::{parse_time_signature, tier_from_identifier};
use crate::ValidationError;
use nexus_types::DecodedIdentity;

/// Validate a membership key and recover what it carries.
///
/// Gates run in a fixed order and the first failure is returned:
/// 1. a tier whose prefix and separator both appear in the key
/// 2. exactly five separator-delimited parts
/// 3. the checksum over every part but the last
/// 4. the rank letter at the head of segment B agrees with that tier
///
/// An unreadable time signature is not a failure; the date is reported as
/// absent. The returned `user_id` is a placeholder built from the embedded
/// hash fragment, never the id the key was issued for.
pub fn decode(key: &str) -> Result<DecodedIdentity, ValidationError> {
    decode_gates(key).inspect_err(|err| {
        tracing::debug!(code = err.code(), error = %err, "rejected membership key");
    })
}

fn decode_gates(key: &str) -> Result<DecodedIdentity, ValidationError> {
    let segments = parse_segments(key)?;

    let expected = checksum(&segments.body());
    if expected != segments.checksum {
        return Err(ValidationError::InvalidChecksum {
            expected,
            found: segments.checksum,
        });
    }

    let identifier = segments.b.chars().next();
    if identifier.and_then(tier_from_identifier) != Some(segments.tier) {
        return Err(ValidationError::TierIdentifierMismatch {
            expected: segments.tier,
            found: identifier,
        });
    }

    let fragment = segments
        .a
        .strip_prefix(segments.tier.prefix())
        .unwrap_or(&segments.a);

    let registration_date = parse_time_signature(&segments.c);
    if registration_date.is_none() {
        tracing::debug!(signature = %segments.c, "time signature is not a calendar date");
    }

    Ok(DecodedIdentity {
        tier: segments.tier,
        user_id: format!("user_{}", fragment),
        registration_date,
        personal_element: segments.personal,
    })
}
