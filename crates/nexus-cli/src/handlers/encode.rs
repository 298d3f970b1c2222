use crate::render;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use nexus_types::{KeyAttributes, Tier};
use serde::Serialize;

#[derive(Serialize)]
struct EncodeOutput<'a> {
    key: &'a str,
    tier: Tier,
    registered_at: DateTime<Utc>,
}

pub fn handle(
    user_id: &str,
    tier: &str,
    date: Option<&str>,
    name: Option<String>,
    attributes: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let tier: Tier = tier.parse()?;
    let registered_at = match date {
        Some(raw) => parse_registration(raw)?,
        None => Utc::now(),
    };

    let mut attrs = match attributes {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("--attributes must be a JSON object")?;
            KeyAttributes::from_value(&value).context("--attributes must be a JSON object")?
        }
        None => KeyAttributes::default(),
    };
    if name.is_some() {
        attrs.name = name;
    }

    let key = nexus_codec::encode_for_tier(user_id, tier, &registered_at, Some(&attrs));

    match format {
        OutputFormat::Json => render::print_json(&EncodeOutput {
            key: &key,
            tier,
            registered_at,
        }),
        OutputFormat::Plain => {
            println!("{}", key);
            Ok(())
        }
    }
}

/// Accepts an RFC 3339 instant, or a bare `YYYY-MM-DD` meaning midnight UTC.
pub fn parse_registration(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD or RFC 3339", raw))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
