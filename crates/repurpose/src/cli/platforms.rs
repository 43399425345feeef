//! Platforms command handler.

use super::OutputFormat;
use repurpose_platform::{PlatformRegistry, get_all_platforms};

/// Prints every registered platform in registry order.
#[tracing::instrument(skip(registry))]
pub fn handle_platforms_command(
    registry: &PlatformRegistry,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let platforms = get_all_platforms(registry);

    match format {
        OutputFormat::Human => {
            for config in platforms {
                let hashtags = if *config.hashtags() {
                    format!("up to {} hashtags", config.max_hashtags())
                } else {
                    "no hashtags".to_string()
                };
                println!(
                    "{} {:<12} {:<8} {:>6} chars, {}",
                    config.icon(),
                    config.id(),
                    config.name(),
                    config.max_chars(),
                    hashtags
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(platforms)?);
        }
    }

    Ok(())
}
