// Re-export modules
pub mod config;
pub mod content;
pub mod error;
pub mod headers;
pub mod jsonld;
pub mod manifest;
pub mod metadata;
pub mod robots;
pub mod sitemap;
pub mod theme;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::SiteConfig;
pub use content::{CategoryNode, ContentData, PageNode};
pub use error::ConfigError;
pub use sitemap::{Sitemap, SitemapEntry, SitemapFilter};

use chrono::{DateTime, Utc};
use headers::SecurityHeaders;
use manifest::WebManifest;
use metadata::{Metadata, MetadataArgs};
use robots::Robots;
use std::path::Path;

/// Main builder tying site configuration to its content tree
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    content: ContentData,
}

impl Site {
    /// Create a site with the given configuration and no content
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            content: ContentData::default(),
        }
    }

    /// Load the site configuration from a JSON file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(SiteConfig::from_file(path)?))
    }

    /// Load the site configuration from a JSON string
    pub fn from_config_str(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(SiteConfig::from_json(json)?))
    }

    /// Set the content tree
    pub fn with_content(mut self, content: ContentData) -> Self {
        self.content = content;
        self
    }

    /// Load the content tree from a JSON file
    pub fn with_content_file(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = ContentData::from_file(path)?;
        Ok(self.with_content(content))
    }

    /// Load the content tree from a JSON string
    pub fn with_content_str(self, json: &str) -> Result<Self, ConfigError> {
        let content = ContentData::from_json(json)?;
        Ok(self.with_content(content))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentData {
        &self.content
    }

    /// Indexable pages of the content tree as sitemap entries
    pub fn sitemap(&self) -> Sitemap {
        self.sitemap_at(Utc::now())
    }

    /// Same as [`Site::sitemap`] with a fixed fallback time
    pub fn sitemap_at(&self, now: DateTime<Utc>) -> Sitemap {
        let pages = self.content.pages();
        SitemapFilter::from_site(&self.config).build_at(&pages, now)
    }

    pub fn robots(&self) -> Robots {
        Robots::from_site(&self.config)
    }

    pub fn manifest(&self) -> WebManifest {
        WebManifest::from_site(&self.config)
    }

    pub fn metadata(&self, args: MetadataArgs) -> Result<Metadata, ConfigError> {
        metadata::construct_metadata(&self.config, args)
    }

    pub fn headers(&self) -> Result<SecurityHeaders, ConfigError> {
        SecurityHeaders::from_site(&self.config)
    }
}
