//! Template command handlers.

use super::{OutputFormat, TemplateCommands};
use repurpose_content::{ContentTemplate, TemplateLibrary};
use repurpose_platform::{PlatformAdapter, PlatformId, PlatformRegistry};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Dispatches a `templates` subcommand.
///
/// `list` without `--platform` shows every platform's templates; the
/// `default_platform` setting only applies to content commands.
#[tracing::instrument(skip_all)]
pub fn handle_templates_command(
    registry: &PlatformRegistry,
    command: &TemplateCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        TemplateCommands::List {
            platform,
            category,
            library,
            format,
        } => {
            let library = load_library(library.as_deref())?;
            let platform = platform
                .as_deref()
                .map(|id| registry.get(id).map(|config| *config.id()))
                .transpose()?;
            let selected = select_templates(&library, platform, category.as_deref());
            print_templates(&selected, *format)
        }
        TemplateCommands::Fill { id, vars, library } => {
            let library = load_library(library.as_deref())?;
            let filled = fill_template(registry, &library, id, vars)?;
            println!("{}", filled);
            Ok(())
        }
    }
}

/// Templates matching the optional platform and category filters, in library order.
pub fn select_templates<'l>(
    library: &'l TemplateLibrary,
    platform: Option<PlatformId>,
    category: Option<&str>,
) -> Vec<&'l ContentTemplate> {
    let mut selected: Vec<&ContentTemplate> = match platform {
        Some(platform) => library.by_platform(platform),
        None => library.all().iter().collect(),
    };
    if let Some(category) = category {
        selected.retain(|template| template.category() == category);
    }
    selected
}

/// Fills template `id` with `vars`, logging any platform-fit issues of the result.
///
/// # Errors
///
/// Fails if the template does not exist or a required variable has no value.
pub fn fill_template(
    registry: &PlatformRegistry,
    library: &TemplateLibrary,
    id: &str,
    vars: &[(String, String)],
) -> Result<String, Box<dyn std::error::Error>> {
    let template = library.get(id)?;
    let values: HashMap<String, String> = vars.iter().cloned().collect();
    let filled = template.fill_checked(&values)?;

    if let Some(config) = registry.config(*template.platform()) {
        let adapter = PlatformAdapter::new(config);
        let report = adapter.validate_content(&filled, &Vec::<String>::new());
        for message in report.error_messages().into_iter().chain(report.warning_messages()) {
            warn!(template = %id, "{}", message);
        }
    }

    info!(template = %id, chars = filled.chars().count(), "Filled template");
    Ok(filled)
}

fn load_library(path: Option<&Path>) -> Result<TemplateLibrary, Box<dyn std::error::Error>> {
    let library = match path {
        Some(path) => TemplateLibrary::from_file(path)?,
        None => TemplateLibrary::builtin()?,
    };
    Ok(library)
}

fn print_templates(
    selected: &[&ContentTemplate],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            for template in selected {
                println!(
                    "{:<24} {:<12} {:<12} {}",
                    template.id(),
                    template.platform(),
                    template.category(),
                    template.name()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(selected)?);
        }
    }

    Ok(())
}
