//! Resource locator template: a URL (or path) with one version placeholder.

use anyhow::{bail, Context, Result};

/// Token replaced by the version identifier.
pub const VERSION_PLACEHOLDER: &str = "%ps_version%";

/// Where the public pack index lives when nothing else is configured.
pub const DEFAULT_PACK_LINK: &str =
    "http://i18n.prestashop.com/translations/%ps_version%/available_languages.json";

/// Version used to check that a template substitutes into a valid URL.
const SAMPLE_VERSION: &str = "1.0.0";

/// Immutable locator template holding exactly one [`VERSION_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorTemplate {
    template: String,
}

impl LocatorTemplate {
    /// Builds a URL template. Rejects templates without exactly one placeholder
    /// or whose substitution is not an absolute URL.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let tpl = Self::with_placeholder(template)?;
        let sample = tpl.resolve(SAMPLE_VERSION);
        url::Url::parse(&sample)
            .with_context(|| format!("pack link does not form a valid URL: {}", tpl.template))?;
        Ok(tpl)
    }

    /// Builds a filesystem path template (placeholder check only).
    pub fn for_path(template: impl Into<String>) -> Result<Self> {
        Self::with_placeholder(template)
    }

    fn with_placeholder(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let count = template.matches(VERSION_PLACEHOLDER).count();
        if count != 1 {
            bail!(
                "locator template must contain exactly one {} placeholder (found {}): {}",
                VERSION_PLACEHOLDER,
                count,
                template
            );
        }
        Ok(Self { template })
    }

    /// Substitutes `version` for the placeholder.
    pub fn resolve(&self, version: &str) -> String {
        self.template.replacen(VERSION_PLACEHOLDER, version, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for LocatorTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_PACK_LINK.to_string(),
        }
    }
}
