//! Web app manifest (`manifest.webmanifest`) for installable sites.

use crate::config::{IconsConfig, SiteConfig};
use serde::Serialize;

/// One manifest icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl WebManifest {
    pub fn from_site(config: &SiteConfig) -> Self {
        let icons = manifest_icons(&config.icons);
        ::log::debug!("Manifest lists {} icons", icons.len());

        Self {
            name: config.name.trim().to_string(),
            short_name: config.short_name.trim().to_string(),
            description: config.description.clone(),
            start_url: config.pwa.start_url.clone(),
            display: config.pwa.display.clone(),
            background_color: config.pwa.background_color.clone(),
            theme_color: config.pwa.theme_color.clone(),
            icons,
        }
    }
}

/// Configured icons in manifest order; blank entries are skipped
pub fn manifest_icons(icons: &IconsConfig) -> Vec<ManifestIcon> {
    let candidates = [
        (&icons.icon32, "32x32", "any"),
        (&icons.icon48, "48x48", "any"),
        (&icons.icon192, "192x192", "any maskable"),
        (&icons.icon512, "512x512", "any maskable"),
        (&icons.apple_touch, "180x180", "any"),
    ];

    candidates
        .into_iter()
        .filter_map(|(src, sizes, purpose)| {
            let src = src.as_deref().filter(|s| !s.trim().is_empty())?;
            Some(ManifestIcon {
                src: src.to_string(),
                sizes: sizes.to_string(),
                mime_type: "image/png".to_string(),
                purpose: purpose.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_fields_are_trimmed() {
        let mut config = SiteConfig::new("  Demo Site ", "https://example.com");
        config.short_name = " Demo ".to_string();
        config.description = "A demo".to_string();

        let manifest = WebManifest::from_site(&config);
        assert_eq!(manifest.name, "Demo Site");
        assert_eq!(manifest.short_name, "Demo");
        assert_eq!(manifest.start_url, "/");
        assert_eq!(manifest.theme_color, "#3b82f6");
        assert!(manifest.icons.is_empty());
    }

    #[test]
    fn test_only_configured_icons_are_listed() {
        let icons = IconsConfig {
            icon32: Some("/favicon-32.png".to_string()),
            icon48: Some("".to_string()),
            icon512: Some("/icon-512.png".to_string()),
            apple_touch: Some("/apple-touch-icon.png".to_string()),
            ..IconsConfig::default()
        };

        let listed = manifest_icons(&icons);
        let sources: Vec<&str> = listed.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(
            sources,
            vec!["/favicon-32.png", "/icon-512.png", "/apple-touch-icon.png"]
        );
        assert_eq!(listed[1].sizes, "512x512");
        assert_eq!(listed[1].purpose, "any maskable");
        assert_eq!(listed[2].sizes, "180x180");
        assert_eq!(listed[2].purpose, "any");
    }

    #[test]
    fn test_manifest_json_keys() {
        let mut config = SiteConfig::new("Demo", "https://example.com");
        config.icons.icon192 = Some("/icon-192.png".to_string());

        let json = serde_json::to_value(WebManifest::from_site(&config)).unwrap();
        assert_eq!(json["short_name"], "Demo");
        assert_eq!(json["background_color"], "#ffffff");
        assert_eq!(json["icons"][0]["type"], "image/png");
        assert_eq!(json["icons"][0]["sizes"], "192x192");
    }
}
