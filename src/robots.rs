//! robots.txt policy built from the site's indexing settings.

use crate::config::{IndexingMode, SiteConfig};
use serde::Serialize;

/// A `User-agent` group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disallow: Vec<String>,
}

/// Complete robots policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub rules: Vec<RobotsRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<String>,
}

impl Robots {
    /// Build the policy: block everything in `disallow` mode, otherwise
    /// allow the site minus the configured disallow paths
    pub fn from_site(config: &SiteConfig) -> Self {
        let rule = match config.seo.indexing {
            IndexingMode::Disallow => {
                ::log::info!("Indexing disabled, robots will disallow all paths");
                RobotsRule {
                    user_agent: "*".to_string(),
                    allow: Vec::new(),
                    disallow: vec!["/".to_string()],
                }
            }
            IndexingMode::Allow => RobotsRule {
                user_agent: "*".to_string(),
                allow: vec!["/".to_string()],
                disallow: config.seo.disallow_paths.clone(),
            },
        };

        Self {
            rules: vec![rule],
            sitemap: config.seo.sitemap_url.clone(),
        }
    }

    /// Render as robots.txt
    pub fn to_txt(&self) -> String {
        let mut txt = String::new();

        for rule in &self.rules {
            txt.push_str(&format!("User-agent: {}\n", rule.user_agent));
            for path in &rule.allow {
                txt.push_str(&format!("Allow: {}\n", path));
            }
            for path in &rule.disallow {
                txt.push_str(&format!("Disallow: {}\n", path));
            }
            txt.push('\n');
        }

        if let Some(sitemap) = &self.sitemap {
            txt.push_str(&format!("Sitemap: {}\n", sitemap));
        }

        txt
    }
}
