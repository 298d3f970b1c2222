use crate::render;
use crate::types::OutputFormat;
use anyhow::Result;
use nexus_qr::{PresentationMetadata, Presenter};

pub fn handle(presenter: &Presenter, key: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let response = presenter.respond(key, None);
            render::print_json(&response)?;
            if let Some(details) = response.details {
                anyhow::bail!("{}: {}", nexus_qr::PresentationError::MESSAGE, details);
            }
            Ok(())
        }
        OutputFormat::Plain => {
            let metadata = presenter.describe(key, None)?;
            print_metadata(&metadata);
            Ok(())
        }
    }
}

fn print_metadata(metadata: &PresentationMetadata) {
    let visual = &metadata.visual_parameters;
    render::field(
        "Tier",
        format!(
            "{} (level {})",
            render::paint(&metadata.tier_name, &visual.main_color),
            metadata.tier_level
        ),
    );
    render::field("Validation URL", &metadata.qr_code_data.validation_url);
    render::field("Style", &visual.style);
    render::field("Main color", render::paint(&visual.main_color, &visual.main_color));
    render::field("Pattern complexity", visual.pattern_complexity);
}
