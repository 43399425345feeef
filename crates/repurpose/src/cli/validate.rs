//! Validation command handler.

use super::{ContentArgs, OutputFormat, read_draft};
use crate::Settings;
use repurpose_content::merge_hashtags;
use repurpose_platform::{PlatformConfig, PlatformRegistry, ValidationReport, get_platform_adapter};

/// Overall result of a validate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// No errors and no warnings
    Clean,
    /// Valid, with warnings
    Warnings,
    /// At least one error
    Invalid,
}

impl ValidationOutcome {
    /// Classifies a report.
    pub fn of(report: &ValidationReport) -> Self {
        if !report.is_valid() {
            Self::Invalid
        } else if !report.warnings.is_empty() {
            Self::Warnings
        } else {
            Self::Clean
        }
    }

    /// Process exit status: 1 for errors, 2 for warnings in strict mode.
    pub fn exit_code(self, strict: bool) -> i32 {
        match self {
            Self::Invalid => 1,
            Self::Warnings if strict => 2,
            Self::Warnings | Self::Clean => 0,
        }
    }
}

/// Handles the validate command.
///
/// # Arguments
///
/// * `settings` - Loaded settings; `strict` there also enables strict mode
/// * `registry` - Platform table with overrides applied
/// * `args` - Input source, platform and extra hashtags
/// * `format` - Output format (human or json)
/// * `strict` - Treat warnings as failures
#[tracing::instrument(skip_all, fields(platform = ?args.platform))]
pub fn handle_validate_command(
    settings: &Settings,
    registry: &PlatformRegistry,
    args: &ContentArgs,
    format: OutputFormat,
    strict: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let platform = settings.resolve_platform(args.platform.as_deref())?;
    let adapter = get_platform_adapter(registry, platform)?;

    let draft = read_draft(args)?;
    let hashtags = merge_hashtags(draft.hashtags(), &args.tags);
    let report = adapter.validate_content(draft.content(), &hashtags);
    let strict = strict || *settings.strict();
    let outcome = ValidationOutcome::of(&report);

    tracing::info!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validation finished"
    );

    match format {
        OutputFormat::Human => output_human(adapter.config(), &report, outcome, strict),
        OutputFormat::Json => output_json(adapter.config(), &report)?,
    }

    Ok(outcome.exit_code(strict))
}

/// Outputs the report in human-readable format.
fn output_human(
    config: &PlatformConfig,
    report: &ValidationReport,
    outcome: ValidationOutcome,
    strict: bool,
) {
    let status_icon = match outcome {
        ValidationOutcome::Invalid => "❌",
        ValidationOutcome::Warnings if strict => "⚠️",
        _ => "✅",
    };

    println!("{} {} {}", status_icon, config.icon(), config.name());
    println!("{}", "─".repeat(40));

    if outcome == ValidationOutcome::Clean {
        println!("No issues found");
    } else {
        println!("{}", report.format_human());
    }
}

/// Outputs the report in JSON format.
fn output_json(
    config: &PlatformConfig,
    report: &ValidationReport,
) -> Result<(), Box<dyn std::error::Error>> {
    use serde_json::json;

    let output = json!({
        "platform": config.id(),
        "valid": report.is_valid(),
        "errors": report.errors,
        "warnings": report.warnings,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
