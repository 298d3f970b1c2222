use crate::render;
use crate::types::OutputFormat;
use anyhow::Result;
use nexus_types::Tier;
use serde::Serialize;

#[derive(Serialize)]
struct TierRow {
    name: &'static str,
    display_name: &'static str,
    rank: u8,
    prefix: &'static str,
    separator: char,
    color: Option<&'static str>,
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let rows: Vec<TierRow> = Tier::ALL
        .into_iter()
        .map(|tier| TierRow {
            name: tier.name(),
            display_name: tier.display_name(),
            rank: tier.rank(),
            prefix: tier.prefix(),
            separator: tier.separator(),
            color: nexus_qr::palette::tier_color(tier.name()),
        })
        .collect();

    match format {
        OutputFormat::Json => render::print_json(&rows),
        OutputFormat::Plain => {
            println!("{:<6} {:<14} {:<8} {}", "RANK", "TIER", "PREFIX", "SEPARATOR");
            for (tier, row) in Tier::ALL.into_iter().zip(&rows) {
                // Pad before painting so escape codes do not skew the columns.
                let name = format!("{:<14}", row.name);
                let label = row
                    .color
                    .map(|color| render::paint(&name, color))
                    .unwrap_or(name);
                println!(
                    "{:<6} {} {:<8} {}",
                    tier.rank(),
                    label,
                    row.prefix,
                    row.separator
                );
            }
            Ok(())
        }
    }
}
