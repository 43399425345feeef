//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the repurpose binary.

mod commands;
mod format;
mod input;
mod platforms;
mod templates;
mod validate;

pub use commands::{Cli, Commands, ContentArgs, OutputFormat, TemplateCommands, parse_variable};
pub use format::{format_input, handle_format_command};
pub use input::read_draft;
pub use platforms::handle_platforms_command;
pub use templates::{fill_template, handle_templates_command, select_templates};
pub use validate::{ValidationOutcome, handle_validate_command};
