//! Fill-in content templates.

use derive_getters::Getters;
use repurpose_error::{TemplateError, TemplateErrorKind};
use repurpose_platform::PlatformId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, instrument};

const BUILTIN_TEMPLATES: &str = include_str!("builtin_templates.toml");

/// Input widget a template variable is meant to be collected with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VariableKind {
    /// Single-line text
    Text,
    /// Multi-line text
    Textarea,
    /// One of a fixed set of options
    Select,
    /// Numeric value
    Number,
}

/// A named slot in a template.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TemplateVariable {
    /// Placeholder name, used as `{{name}}` in the template body.
    name: String,

    /// Label shown to the writer.
    description: String,

    /// How the value is collected.
    kind: VariableKind,

    /// Choices for select variables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,

    /// Whether a non-empty value must be supplied.
    #[serde(default)]
    required: bool,

    /// Example input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
}

impl TemplateVariable {
    /// Label used when reporting this variable as missing.
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

/// A reusable post skeleton for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ContentTemplate {
    /// Unique template id.
    id: String,

    /// Display name.
    name: String,

    /// What the template is for.
    description: String,

    /// Grouping such as `ecommerce` or `lifestyle`.
    category: String,

    /// Platform the template is written for.
    platform: PlatformId,

    /// Kind of content produced, such as `post` or `script`.
    content_type: String,

    /// Body with `{{name}}` placeholders.
    template: String,

    /// Declared placeholders.
    #[serde(default)]
    variables: Vec<TemplateVariable>,

    /// Sample of a filled template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    example_output: Option<String>,
}

/// Outcome of checking supplied values against a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct TemplateCheck {
    /// Labels of required variables with no value.
    missing: Vec<String>,
}

impl TemplateCheck {
    /// Returns true if every required variable has a value.
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

impl ContentTemplate {
    /// Substitutes every declared variable.
    ///
    /// Variables without a value become empty; placeholders that are not
    /// declared are left untouched.
    #[instrument(skip_all, fields(template = %self.id))]
    pub fn fill(&self, values: &HashMap<String, String>) -> String {
        self.variables
            .iter()
            .fold(self.template.clone(), |body, variable| {
                let placeholder = format!("{{{{{}}}}}", variable.name);
                let value = values.get(&variable.name).map(String::as_str).unwrap_or("");
                body.replace(&placeholder, value)
            })
    }

    /// Lists required variables whose value is absent or empty.
    pub fn check_variables(&self, values: &HashMap<String, String>) -> TemplateCheck {
        let missing = self
            .variables
            .iter()
            .filter(|variable| variable.required)
            .filter(|variable| values.get(&variable.name).is_none_or(|v| v.is_empty()))
            .map(|variable| variable.label().to_string())
            .collect();
        TemplateCheck { missing }
    }

    /// Fills the template after checking that every required value is present.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateErrorKind::MissingVariables`] naming each missing variable.
    pub fn fill_checked(&self, values: &HashMap<String, String>) -> Result<String, TemplateError> {
        let check = self.check_variables(values);
        if !check.is_valid() {
            return Err(TemplateError::new(TemplateErrorKind::MissingVariables(
                check.missing.join(", "),
            )));
        }
        Ok(self.fill(values))
    }
}

/// An ordered collection of content templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLibrary {
    #[serde(default)]
    templates: Vec<ContentTemplate>,
}

impl TemplateLibrary {
    /// The templates shipped with the toolkit.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateErrorKind::Parse`] if the embedded library is malformed.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_toml_str(BUILTIN_TEMPLATES)
    }

    /// Parses a library from TOML with a `[[templates]]` array.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateErrorKind::Parse`] if the TOML is invalid or two
    /// templates share an id.
    #[instrument(skip_all)]
    pub fn from_toml_str(source: &str) -> Result<Self, TemplateError> {
        let library: Self = toml::from_str(source)
            .map_err(|e| TemplateError::new(TemplateErrorKind::Parse(e.to_string())))?;

        let mut seen = HashSet::new();
        for template in &library.templates {
            if !seen.insert(template.id.as_str()) {
                return Err(TemplateError::new(TemplateErrorKind::Parse(format!(
                    "duplicate template id '{}'",
                    template.id
                ))));
            }
        }

        debug!(templates = library.templates.len(), "Loaded template library");
        Ok(library)
    }

    /// Reads a library from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateErrorKind::Parse`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            TemplateError::new(TemplateErrorKind::Parse(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            )))
        })?;
        Self::from_toml_str(&source)
    }

    /// All templates in library order.
    pub fn all(&self) -> &[ContentTemplate] {
        &self.templates
    }

    /// Templates written for `platform`.
    pub fn by_platform(&self, platform: PlatformId) -> Vec<&ContentTemplate> {
        self.templates
            .iter()
            .filter(|template| template.platform == platform)
            .collect()
    }

    /// Templates in `category`.
    pub fn by_category(&self, category: &str) -> Vec<&ContentTemplate> {
        self.templates
            .iter()
            .filter(|template| template.category == category)
            .collect()
    }

    /// Looks up a template by id.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateErrorKind::NotFound`] if no template has this id.
    pub fn get(&self, id: &str) -> Result<&ContentTemplate, TemplateError> {
        self.templates
            .iter()
            .find(|template| template.id == id)
            .ok_or_else(|| TemplateError::new(TemplateErrorKind::NotFound(id.to_string())))
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for template in &self.templates {
            if !categories.contains(&template.category.as_str()) {
                categories.push(&template.category);
            }
        }
        categories
    }
}
