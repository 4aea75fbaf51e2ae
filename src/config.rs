use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Site-wide configuration shared by every generator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Full application name
    pub name: String,

    /// Short name used by the web app manifest
    #[serde(default, alias = "short_name")]
    pub short_name: String,

    /// Default description for pages and the manifest
    #[serde(default)]
    pub description: String,

    /// Public base URL of the site
    pub url: String,

    /// Primary language code (e.g. `en`)
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Path of the site logo, relative to `url`
    #[serde(default = "default_logo")]
    pub logo: String,

    #[serde(default)]
    pub seo: SeoConfig,

    #[serde(default)]
    pub og: OpenGraphConfig,

    #[serde(default)]
    pub pwa: PwaConfig,

    #[serde(default)]
    pub icons: IconsConfig,

    #[serde(default)]
    pub page_defaults: PageDefaults,

    #[serde(default)]
    pub author: AuthorInfo,

    /// Creator and publisher name used in metadata and JSON-LD
    #[serde(default = "default_creator")]
    pub creator: String,

    #[serde(default)]
    pub headers: Vec<HeaderRuleConfig>,
}

/// Whether search engines may index the site at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexingMode {
    #[default]
    Allow,
    Disallow,
}

/// Search engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    #[serde(default)]
    pub indexing: IndexingMode,

    /// Path prefixes excluded from robots and the sitemap
    #[serde(default)]
    pub disallow_paths: Vec<String>,

    /// Absolute URL of the sitemap announced in robots.txt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap_url: Option<String>,

    /// Base used for canonical URLs (falls back to the site URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_base: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,

    #[serde(default)]
    pub social: SocialConfig,

    /// Sitemap revalidation interval in seconds
    #[serde(default = "default_revalidate")]
    pub revalidate: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Open Graph overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphConfig {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,

    /// Default share image path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Progressive web app settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PwaConfig {
    #[serde(default = "default_start_url")]
    pub start_url: String,

    #[serde(default = "default_display")]
    pub display: String,

    #[serde(default = "default_background_color")]
    pub background_color: String,

    #[serde(default = "default_theme_color")]
    pub theme_color: String,
}

/// Icon file paths; empty or missing entries are skipped
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_any: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon32: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon48: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon192: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon512: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch: Option<String>,
}

/// Robots defaults applied to every page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots_index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots_follow: Option<bool>,
}

/// A person credited as author
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// A header rule as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderRuleConfig {
    /// Path pattern such as `/:path*` or `/blog/:slug`
    pub source: String,
    pub headers: Vec<HeaderEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Default language code
fn default_lang() -> String {
    "en".to_string()
}

/// Default logo path
fn default_logo() -> String {
    "/logo.png".to_string()
}

/// Default creator and publisher
fn default_creator() -> String {
    "aifa.dev".to_string()
}

/// Default sitemap revalidation interval (5 minutes)
fn default_revalidate() -> u64 {
    300
}

fn default_start_url() -> String {
    "/".to_string()
}

fn default_display() -> String {
    "standalone".to_string()
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

fn default_theme_color() -> String {
    "#3b82f6".to_string()
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            indexing: IndexingMode::Allow,
            disallow_paths: Vec::new(),
            sitemap_url: None,
            canonical_base: None,
            default_locale: None,
            social: SocialConfig::default(),
            revalidate: default_revalidate(),
        }
    }
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            start_url: default_start_url(),
            display: default_display(),
            background_color: default_background_color(),
            theme_color: default_theme_color(),
        }
    }
}

impl SiteConfig {
    /// Create a configuration with default values for the given name and base URL
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            short_name: name.to_string(),
            description: String::new(),
            url: url.to_string(),
            lang: default_lang(),
            logo: default_logo(),
            seo: SeoConfig::default(),
            og: OpenGraphConfig::default(),
            pwa: PwaConfig::default(),
            icons: IconsConfig::default(),
            page_defaults: PageDefaults::default(),
            author: AuthorInfo::default(),
            creator: default_creator(),
            headers: Vec::new(),
        }
    }

    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        ::log::debug!("Loaded site config from {}", path.display());
        Self::from_json(&contents)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive every generator
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation("`name` must not be empty".into()));
        }

        self.base_url()?;
        if let Some(base) = &self.seo.canonical_base {
            Url::parse(base).map_err(|e| ConfigError::InvalidUrl(base.clone(), e))?;
        }

        Ok(())
    }

    /// The site URL parsed as an absolute URL
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl(self.url.clone(), e))
    }

    /// Base used for canonical links
    pub fn canonical_base(&self) -> &str {
        self.seo.canonical_base.as_deref().unwrap_or(&self.url)
    }

    /// Locale used for metadata when the caller gives none
    pub fn default_locale(&self) -> &str {
        self.seo.default_locale.as_deref().unwrap_or(&self.lang)
    }

    /// Path of the default Open Graph image
    pub fn og_image_path(&self) -> &str {
        self.og.image.as_deref().unwrap_or("/og-image.png")
    }
}
