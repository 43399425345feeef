//! Repurpose CLI - fit generated content to platform limits.

use clap::Parser;
use repurpose::Settings;
use repurpose::cli::{
    Cli, Commands, OutputFormat, handle_format_command, handle_platforms_command,
    handle_templates_command, handle_validate_command,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match cli.log_format {
        OutputFormat::Human => subscriber.init(),
        OutputFormat::Json => subscriber.json().init(),
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let registry = settings.registry()?;

    match &cli.command {
        Commands::Platforms { format } => handle_platforms_command(&registry, *format)?,
        Commands::Format { content, format } => {
            handle_format_command(&settings, &registry, content, *format)?
        }
        Commands::Validate {
            content,
            format,
            strict,
        } => {
            let code = handle_validate_command(&settings, &registry, content, *format, *strict)?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Templates { command } => handle_templates_command(&registry, command)?,
    }

    Ok(())
}
