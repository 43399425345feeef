//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Adapt generated content to Chinese social media platforms.
#[derive(Parser, Debug)]
#[command(name = "repurpose")]
#[command(about = "Fit content to Weibo, Xiaohongshu, Douyin, WeChat and Zhihu")]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to <config dir>/repurpose/repurpose.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub log_format: OutputFormat,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Human,
    /// JSON on stdout
    Json,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the supported platforms and their limits
    Platforms {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Truncate content and cap hashtags for a platform
    Format {
        /// Input source, platform and extra hashtags
        #[command(flatten)]
        content: ContentArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Check content against a platform's limits and conventions
    Validate {
        /// Input source, platform and extra hashtags
        #[command(flatten)]
        content: ContentArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Exit with status 2 when there are warnings
        #[arg(long)]
        strict: bool,
    },

    /// Browse and fill content templates
    Templates {
        /// Template action
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

/// Where content comes from and which platform it targets.
#[derive(Args, Debug, Clone, Default)]
pub struct ContentArgs {
    /// Target platform id (falls back to `default_platform` in settings)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Hashtag to attach; repeatable
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Read content from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input is a model response carrying `{"content", "hashtags"}` JSON
    #[arg(long)]
    pub response: bool,
}

/// Template subcommands.
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List templates
    List {
        /// Only templates for this platform
        #[arg(short, long)]
        platform: Option<String>,

        /// Only templates in this category
        #[arg(long)]
        category: Option<String>,

        /// Load templates from this TOML file instead of the built-in set
        #[arg(long)]
        library: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Fill a template and print the result
    Fill {
        /// Template id
        id: String,

        /// Variable value as name=value; repeatable
        #[arg(short, long = "var", value_parser = parse_variable)]
        vars: Vec<(String, String)>,

        /// Load templates from this TOML file instead of the built-in set
        #[arg(long)]
        library: Option<PathBuf>,
    },
}

/// Parses a `name=value` pair. The value may itself contain `=`.
pub fn parse_variable(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}
