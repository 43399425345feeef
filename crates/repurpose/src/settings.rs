//! User settings loaded from a TOML file and the environment.

use derive_getters::Getters;
use repurpose_error::{ConfigError, RepurposeResult};
use repurpose_platform::{PlatformId, PlatformOverride, PlatformRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Prefix for environment overrides, e.g. `REPURPOSE__STRICT=true`.
pub const ENV_PREFIX: &str = "REPURPOSE";

/// Runtime settings.
///
/// ```toml
/// default_platform = "xiaohongshu"
/// strict = false
///
/// [platforms.weibo]
/// max_chars = 2000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Platform used when a command does not name one
    #[serde(default)]
    default_platform: Option<String>,

    /// Treat validation warnings as failures
    #[serde(default)]
    strict: bool,

    /// Per-platform adjustments keyed by platform id
    #[serde(default)]
    platforms: BTreeMap<String, PlatformOverride>,
}

impl Settings {
    /// Loads settings from `path` (or the default location) and the environment.
    ///
    /// An explicit `path` must exist; the default location is optional.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source cannot be read or does not match
    /// the settings shape.
    pub fn load(path: Option<&Path>) -> RepurposeResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Settings::load`], reading `REPURPOSE__*` keys from `env` instead
    /// of the process environment when it is given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source cannot be read or does not match
    /// the settings shape.
    #[instrument(skip_all, fields(path = ?path))]
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> RepurposeResult<Self> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(default_path) = Self::default_path() {
                    debug!(path = %default_path.display(), "Checking default settings file");
                    builder = builder.add_source(config::File::from(default_path).required(false));
                }
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings: Self = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::new(format!("Failed to load settings: {}", e)))?;

        info!(
            overrides = settings.platforms.len(),
            strict = settings.strict,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses settings from a TOML string, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the TOML does not match the settings shape.
    pub fn from_toml_str(source: &str) -> RepurposeResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        Ok(settings)
    }

    /// `<config dir>/repurpose/repurpose.toml`, when a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("repurpose").join("repurpose.toml"))
    }

    /// Builds the platform registry with these settings' overrides applied.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown platform id and a platform
    /// error for an override that breaks a limit.
    pub fn registry(&self) -> RepurposeResult<PlatformRegistry> {
        let overrides = self
            .platforms
            .iter()
            .map(|(id, adjustment)| {
                id.parse::<PlatformId>()
                    .map(|platform| (platform, adjustment))
                    .map_err(|_| ConfigError::new(format!("Unknown platform '{}' in settings", id)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlatformRegistry::builtin().with_overrides(overrides)?)
    }

    /// Platform to use given an optional explicit choice.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when neither the choice nor a default is set.
    pub fn resolve_platform<'a>(&'a self, explicit: Option<&'a str>) -> RepurposeResult<&'a str> {
        explicit
            .or(self.default_platform.as_deref())
            .ok_or_else(|| {
                ConfigError::new("No platform given and no default_platform configured").into()
            })
    }
}
