//! Format command handler.

use super::{ContentArgs, OutputFormat, read_draft};
use crate::Settings;
use repurpose_content::{compose_post, merge_hashtags};
use repurpose_platform::{ContentFormat, PlatformRegistry, get_platform_adapter};
use tracing::info;

/// Reads content and fits it to the platform named by `args` or `settings`.
///
/// Hashtags from a model response come first, then `--tag` values.
#[tracing::instrument(skip_all, fields(platform = ?args.platform))]
pub fn format_input(
    settings: &Settings,
    registry: &PlatformRegistry,
    args: &ContentArgs,
) -> Result<ContentFormat, Box<dyn std::error::Error>> {
    let platform = settings.resolve_platform(args.platform.as_deref())?;
    let adapter = get_platform_adapter(registry, platform)?;

    let draft = read_draft(args)?;
    let hashtags = merge_hashtags(draft.hashtags(), &args.tags);
    let formatted = adapter.format_content(draft.content(), &hashtags);

    info!(
        platform = %adapter.config().id(),
        chars = formatted.metadata().char_count(),
        hashtags = formatted.hashtags().len(),
        "Formatted content"
    );
    Ok(formatted)
}

/// Handles the format command by printing the fitted post.
pub fn handle_format_command(
    settings: &Settings,
    registry: &PlatformRegistry,
    args: &ContentArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let formatted = format_input(settings, registry, args)?;

    match format {
        OutputFormat::Human => {
            println!("{}", compose_post(formatted.content(), formatted.hashtags()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&formatted)?);
        }
    }

    Ok(())
}
