use chrono::{Datelike, NaiveDate};
use nexus_types::Tier;

/// Map a tier rank onto the uppercase Latin alphabet (rank 1 -> 'A').
pub fn tier_identifier(tier: Tier) -> char {
    char::from(b'A' + (tier.rank() - 1))
}

/// Reverse alphabet lookup; `None` for anything outside 'A'..='Z' or for a
/// letter no tier is ranked at.
pub fn tier_from_identifier(identifier: char) -> Option<Tier> {
    if !identifier.is_ascii_uppercase() {
        return None;
    }
    Tier::from_rank(identifier as u8 - b'A' + 1)
}

/// Encode a registration date as `YY M DD` in uppercase hex.
///
/// Year (mod 100) and day are zero-padded to two digits each; the month is
/// always a single digit (1-9, A-C), so the signature is five characters wide.
pub fn time_signature(date: &impl Datelike) -> String {
    let year = date.year().rem_euclid(100);
    format!("{:02X}{:X}{:02X}", year, date.month(), date.day())
}

/// Reconstruct the calendar date embedded in a time signature.
///
/// The century is assumed to be 2000. Anything that does not parse as hex or
/// does not name a real date yields `None`.
pub fn parse_time_signature(signature: &str) -> Option<NaiveDate> {
    let year = u32::from_str_radix(signature.get(..2)?, 16).ok()?;
    let month = u32::from_str_radix(signature.get(2..3)?, 16).ok()?;
    let day = u32::from_str_radix(signature.get(3..)?, 16).ok()?;
    NaiveDate::from_ymd_opt(2000 + year as i32, month, day)
}
