//! Configuration for a Vitrina catalog.
//!
//! A catalog is described by a `vitrina.toml` file:
//!
//! ```toml
//! [site]
//! name = "Crystal Beauty"
//!
//! [catalog]
//! source = "products.csv"
//!
//! [images]
//! base = "images/"
//! placeholder = "images/placeholder.svg"
//! strategy = "manifest"
//! manifest = "images/images.json"
//! extensions = ["webp"]
//!
//! [contact]
//! phone = "50670935053"
//! ```
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the standard storefront layout. Selected keys can be overridden
//! through `VITRINA_*` environment variables.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name used for config directories and env-var prefixes.
pub const PROJECT_NAME: &str = "vitrina";

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "VITRINA_CONFIG";

const ENV_PREFIX: &str = "VITRINA";

// ============================================================================
// Sections
// ============================================================================

/// Site-wide presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Store name, appended to detail page titles.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Directory (relative to the site root) holding detail pages.
    #[serde(default = "default_detail_dir")]
    pub detail_dir: String,
}

/// Where the product list comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Local path or http(s) URL of the products CSV.
    #[serde(default = "default_catalog_source")]
    pub source: String,
}

/// How product images are discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverStrategy {
    /// Look filenames up in a precomputed manifest.
    #[default]
    Manifest,
    /// Check each candidate URL for existence.
    Probe,
}

impl std::str::FromStr for ResolverStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manifest" => Ok(Self::Manifest),
            "probe" => Ok(Self::Probe),
            other => Err(Error::config(format!(
                "Unknown image strategy '{other}' (expected 'manifest' or 'probe')"
            ))),
        }
    }
}

impl std::fmt::Display for ResolverStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manifest => write!(f, "manifest"),
            Self::Probe => write!(f, "probe"),
        }
    }
}

/// Image discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Prefix joined verbatim with image filenames (local dir or remote URL).
    #[serde(default = "default_image_base")]
    pub base: String,

    /// Image shown when a product has no images or an image fails to load.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Discovery strategy.
    #[serde(default)]
    pub strategy: ResolverStrategy,

    /// Location of the JSON filename manifest (manifest strategy only).
    #[serde(default = "default_manifest", skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// Candidate extensions, in preference order. For each image slot the
    /// first extension that exists wins.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// First suffix index of additional images (`{id}-{n}`).
    #[serde(default = "default_first_extra_index")]
    pub first_extra_index: u32,

    /// Last suffix index of additional images.
    #[serde(default = "default_last_extra_index")]
    pub last_extra_index: u32,
}

/// Contact link settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Phone number in international format, digits only.
    #[serde(default = "default_phone")]
    pub phone: String,

    /// Message prefix placed before the product summary.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Link label.
    #[serde(default = "default_contact_label")]
    pub label: String,
}

/// Complete configuration for one catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VitrinaConfig {
    /// Site presentation.
    #[serde(default)]
    pub site: SiteConfig,

    /// Product list source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Image discovery.
    #[serde(default)]
    pub images: ImageConfig,

    /// Contact link.
    #[serde(default)]
    pub contact: ContactConfig,
}

fn default_site_name() -> String {
    "Crystal Beauty".to_string()
}

fn default_detail_dir() -> String {
    "product".to_string()
}

fn default_catalog_source() -> String {
    "products.csv".to_string()
}

fn default_image_base() -> String {
    "images/".to_string()
}

fn default_placeholder() -> String {
    "images/placeholder.svg".to_string()
}

fn default_manifest() -> Option<String> {
    Some("images/images.json".to_string())
}

fn default_extensions() -> Vec<String> {
    vec!["webp".to_string()]
}

fn default_first_extra_index() -> u32 {
    1
}

fn default_last_extra_index() -> u32 {
    5
}

fn default_phone() -> String {
    "50670935053".to_string()
}

fn default_greeting() -> String {
    "Hola! Me interesa el producto:".to_string()
}

fn default_contact_label() -> String {
    "💬 Consultar por WhatsApp".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            detail_dir: default_detail_dir(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base: default_image_base(),
            placeholder: default_placeholder(),
            strategy: ResolverStrategy::default(),
            manifest: default_manifest(),
            extensions: default_extensions(),
            first_extra_index: default_first_extra_index(),
            last_extra_index: default_last_extra_index(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            greeting: default_greeting(),
            label: default_contact_label(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl VitrinaConfig {
    /// Load configuration, applying environment overrides.
    ///
    /// Resolution order for the file:
    /// 1. `explicit` path (must exist)
    /// 2. `VITRINA_CONFIG` environment variable (must exist)
    /// 3. `vitrina.toml` in the current directory
    /// 4. `<platform config dir>/vitrina/config.toml`
    ///
    /// When no file is found through 3 or 4, defaults are used.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) if explicit.is_some() || env::var(CONFIG_ENV_VAR).is_ok() => {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            _ => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides_from(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Determine which config file would be used, without reading it.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from("vitrina.toml");
        if local.exists() {
            return Some(local);
        }
        Self::default_config_path()
    }

    /// Platform config location (`~/.config/vitrina/config.toml` on Linux).
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Environment variable name for a key suffix.
    ///
    /// ```
    /// use vitrina_core::VitrinaConfig;
    ///
    /// assert_eq!(VitrinaConfig::env_var("IMAGES_BASE"), "VITRINA_IMAGES_BASE");
    /// ```
    pub fn env_var(suffix: &str) -> String {
        format!("{ENV_PREFIX}_{suffix}")
    }

    /// Apply overrides read through `lookup` (normally `std::env::var`).
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |suffix: &str| lookup(&Self::env_var(suffix));

        if let Some(v) = get("SITE_NAME") {
            self.site.name = v;
        }
        if let Some(v) = get("CATALOG_SOURCE") {
            self.catalog.source = v;
        }
        if let Some(v) = get("IMAGES_BASE") {
            self.images.base = v;
        }
        if let Some(v) = get("IMAGES_PLACEHOLDER") {
            self.images.placeholder = v;
        }
        if let Some(v) = get("IMAGES_STRATEGY") {
            match v.parse() {
                Ok(strategy) => self.images.strategy = strategy,
                Err(e) => log::warn!("Ignoring {}: {e}", Self::env_var("IMAGES_STRATEGY")),
            }
        }
        if let Some(v) = get("IMAGES_MANIFEST") {
            self.images.manifest = if v.is_empty() { None } else { Some(v) };
        }
        if let Some(v) = get("IMAGES_EXTENSIONS") {
            self.images.extensions = v
                .split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect();
        }
        if let Some(v) = get("CONTACT_PHONE") {
            self.contact.phone = v;
        }
    }

    /// Flatten the overridable keys into `(VAR, value)` pairs.
    pub fn to_env_vars(&self) -> Vec<(String, String)> {
        vec![
            (Self::env_var("SITE_NAME"), self.site.name.clone()),
            (Self::env_var("CATALOG_SOURCE"), self.catalog.source.clone()),
            (Self::env_var("IMAGES_BASE"), self.images.base.clone()),
            (
                Self::env_var("IMAGES_PLACEHOLDER"),
                self.images.placeholder.clone(),
            ),
            (
                Self::env_var("IMAGES_STRATEGY"),
                self.images.strategy.to_string(),
            ),
            (
                Self::env_var("IMAGES_MANIFEST"),
                self.images.manifest.clone().unwrap_or_default(),
            ),
            (
                Self::env_var("IMAGES_EXTENSIONS"),
                self.images.extensions.join(","),
            ),
            (Self::env_var("CONTACT_PHONE"), self.contact.phone.clone()),
        ]
    }

    /// Check invariants the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.source.trim().is_empty() {
            return Err(Error::config("catalog.source must not be empty"));
        }
        if self.images.placeholder.trim().is_empty() {
            return Err(Error::config("images.placeholder must not be empty"));
        }
        if self.images.extensions.is_empty() {
            return Err(Error::config("images.extensions must not be empty"));
        }
        if self.images.first_extra_index > self.images.last_extra_index {
            return Err(Error::config(format!(
                "images.first_extra_index ({}) is greater than images.last_extra_index ({})",
                self.images.first_extra_index, self.images.last_extra_index
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
