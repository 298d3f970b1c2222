use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::types::LogLevel;
use anyhow::Result;
use nexus_qr::Presenter;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_level);

    // Only describe and `config show` read the file; a broken config must not
    // block the other commands.
    let config_path = resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode {
            user_id,
            tier,
            date,
            name,
            attributes,
        } => handlers::encode::handle(
            &user_id,
            &tier,
            date.as_deref(),
            name,
            attributes.as_deref(),
            cli.format,
        ),

        Commands::Validate { key } => handlers::validate::handle(&key, cli.format),

        Commands::Describe { key } => {
            let config = Config::load_from(&config_path)?;
            let presenter = Presenter::new(config.presentation);
            handlers::describe::handle(&presenter, &key, cli.format)
        }

        Commands::Tiers => handlers::tiers::handle(cli.format),

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                let config = Config::load_from(&config_path)?;
                handlers::config::show(&config_path, &config, cli.format)
            }
            ConfigCommand::Init => handlers::config::init(&config_path),
        },
    }
}

/// Logs go to stderr so stdout stays clean for keys and JSON.
/// `RUST_LOG` takes precedence over `--log-level`.
fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}
