use crate::ValidationError;
use nexus_types::Tier;
use std::fmt;

pub const SEGMENT_COUNT: usize = 5;

/// Width of the personal element at the tail of the fourth segment.
pub const PERSONAL_LEN: usize = 2;

/// The five parts of a membership key, with the fourth split into segment D
/// and the personal element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySegments {
    pub tier: Tier,
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
    pub personal: String,
    pub checksum: String,
}

impl KeySegments {
    /// Checksum input: all segments before the checksum, no separators.
    pub fn body(&self) -> String {
        [&self.a, &self.b, &self.c, &self.d, &self.personal]
            .into_iter()
            .map(String::as_str)
            .collect()
    }
}

impl fmt::Display for KeySegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.tier.separator();
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{}{sep}{}",
            self.a, self.b, self.c, self.d, self.personal, self.checksum
        )
    }
}

/// First tier, in table order, whose prefix starts the key and whose
/// separator occurs anywhere in it.
pub fn identify_tier(key: &str) -> Option<Tier> {
    Tier::ALL
        .into_iter()
        .find(|tier| key.starts_with(tier.prefix()) && key.contains(tier.separator()))
}

/// Split a key into its segments without checking the checksum.
pub fn parse_segments(key: &str) -> Result<KeySegments, ValidationError> {
    let tier = identify_tier(key).ok_or(ValidationError::UnknownKeyFormat)?;

    let parts: Vec<&str> = key.split(tier.separator()).collect();
    let &[a, b, c, tail, checksum] = parts.as_slice() else {
        return Err(ValidationError::InvalidKeyStructure {
            segments: parts.len(),
        });
    };

    // A fourth part too short to hold the personal element has no segment D.
    let tail_len = tail.chars().count();
    if tail_len < PERSONAL_LEN {
        return Err(ValidationError::InvalidKeyStructure {
            segments: parts.len(),
        });
    }
    let split_at = tail
        .char_indices()
        .nth(tail_len - PERSONAL_LEN)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let (d, personal) = tail.split_at(split_at);

    Ok(KeySegments {
        tier,
        a: a.to_string(),
        b: b.to_string(),
        c: c.to_string(),
        d: d.to_string(),
        personal: personal.to_string(),
        checksum: checksum.to_string(),
    })
}
