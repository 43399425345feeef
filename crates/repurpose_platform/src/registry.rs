//! The immutable table of platform configurations.

use crate::{PlatformAdapter, PlatformConfig, PlatformId, PlatformOverride};
use repurpose_error::{PlatformError, PlatformErrorKind, PlatformResult};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Ordered, immutable mapping from platform id to configuration.
///
/// A registry is built once and handed to whatever needs platform lookups;
/// adjusted registries are new values rather than mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRegistry {
    configs: Vec<PlatformConfig>,
}

impl PlatformRegistry {
    /// Registry of every built-in platform in declaration order.
    pub fn builtin() -> Self {
        Self {
            configs: PlatformId::iter().map(PlatformConfig::builtin).collect(),
        }
    }

    /// Builds a registry from caller-supplied configurations, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformErrorKind::InvalidConfig`] if an id appears twice or a
    /// character limit is zero.
    pub fn from_configs(configs: Vec<PlatformConfig>) -> PlatformResult<Self> {
        let mut seen = HashSet::new();
        for config in &configs {
            if !seen.insert(*config.id()) {
                return Err(PlatformError::new(PlatformErrorKind::InvalidConfig(
                    format!("duplicate platform '{}'", config.id()),
                )));
            }
            check_limits(config)?;
        }
        Ok(Self { configs })
    }

    /// Returns a new registry with overrides applied to matching platforms.
    ///
    /// Overrides naming a platform absent from this registry are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformErrorKind::InvalidConfig`] if an override sets a zero
    /// character limit.
    #[instrument(skip_all)]
    pub fn with_overrides<'o, I>(&self, overrides: I) -> PlatformResult<Self>
    where
        I: IntoIterator<Item = (PlatformId, &'o PlatformOverride)>,
    {
        let mut configs = self.configs.clone();
        for (id, adjustment) in overrides {
            match configs.iter_mut().find(|config| *config.id() == id) {
                Some(config) => {
                    let adjusted = adjustment.apply(config);
                    check_limits(&adjusted)?;
                    debug!(platform = %id, "Applied platform override");
                    *config = adjusted;
                }
                None => debug!(platform = %id, "Override for unregistered platform ignored"),
            }
        }
        Ok(Self { configs })
    }

    /// Looks up a configuration by its string id.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformErrorKind::NotFound`] if no platform with this id is registered.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> PlatformResult<&PlatformConfig> {
        id.parse::<PlatformId>()
            .ok()
            .and_then(|platform| self.config(platform))
            .ok_or_else(|| PlatformError::new(PlatformErrorKind::NotFound(id.to_string())))
    }

    /// Looks up a configuration by typed id.
    pub fn config(&self, id: PlatformId) -> Option<&PlatformConfig> {
        self.configs.iter().find(|config| *config.id() == id)
    }

    /// Returns an adapter bound to the platform with this id.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformErrorKind::NotFound`] if no platform with this id is registered.
    pub fn adapter(&self, id: &str) -> PlatformResult<PlatformAdapter<'_>> {
        self.get(id).map(PlatformAdapter::new)
    }

    /// All configurations in registry order.
    pub fn all(&self) -> &[PlatformConfig] {
        &self.configs
    }

    /// Iterates configurations in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlatformConfig> {
        self.configs.iter()
    }

    /// Number of registered platforms.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns true if no platforms are registered.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a PlatformRegistry {
    type Item = &'a PlatformConfig;
    type IntoIter = std::slice::Iter<'a, PlatformConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn check_limits(config: &PlatformConfig) -> PlatformResult<()> {
    if *config.max_chars() == 0 {
        return Err(PlatformError::new(PlatformErrorKind::InvalidConfig(
            format!("platform '{}' has a zero character limit", config.id()),
        )));
    }
    Ok(())
}

/// Returns an adapter for `id` from `registry`.
///
/// # Errors
///
/// Returns [`PlatformErrorKind::NotFound`] if the id is not registered.
pub fn get_platform_adapter<'r>(
    registry: &'r PlatformRegistry,
    id: &str,
) -> PlatformResult<PlatformAdapter<'r>> {
    registry.adapter(id)
}

/// All configurations of `registry` in registry order.
pub fn get_all_platforms(registry: &PlatformRegistry) -> &[PlatformConfig] {
    registry.all()
}
