use crate::config::Config;
use crate::render;
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ConfigOutput<'a> {
    path: String,
    exists: bool,
    config: &'a Config,
}

pub fn show(config_path: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => render::print_json(&ConfigOutput {
            path: config_path.display().to_string(),
            exists: config_path.exists(),
            config,
        }),
        OutputFormat::Plain => {
            let suffix = if config_path.exists() { "" } else { " (not created)" };
            render::field("Config", format!("{}{}", config_path.display(), suffix));
            render::field(
                "Validation URL",
                &config.presentation.validation_base_url,
            );
            render::field("Fallback color", &config.presentation.fallback_color);
            Ok(())
        }
    }
}

pub fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    Config::default().save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
