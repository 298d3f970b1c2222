use crate::render;
use crate::types::OutputFormat;
use anyhow::Result;
use nexus_codec::ValidationReport;

pub fn handle(key: &str, format: OutputFormat) -> Result<()> {
    let report = nexus_codec::validate(key);

    match format {
        OutputFormat::Json => render::print_json(&report)?,
        OutputFormat::Plain => print_report(&report),
    }

    if let Some(error) = report.error {
        anyhow::bail!(error);
    }
    Ok(())
}

fn print_report(report: &ValidationReport) {
    render::field("Status", render::status(report.valid));

    let Some(identity) = &report.identity else {
        return;
    };

    let tier = nexus_types::Tier::from_name(&identity.tier_name)
        .map(render::tier_label)
        .unwrap_or_else(|| identity.tier_name.clone());
    render::field("Tier", format!("{} (level {})", tier, identity.tier_level));
    render::field("User id", &identity.user_id);
    render::field(
        "Registered",
        identity
            .registration_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    );
    render::field("Personal element", &identity.personal_element);
}
