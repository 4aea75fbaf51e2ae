//! Page metadata: title, canonical link, icons, Open Graph, Twitter card and
//! robots directives.
//!
//! Every field of [`MetadataArgs`] is optional. Missing values fall back to
//! the site configuration, so `construct_metadata(&config, MetadataArgs::default())`
//! yields the home page metadata.

use crate::config::{IconsConfig, SiteConfig};
use crate::error::ConfigError;
use crate::utils::{MAX_DESCRIPTION_LENGTH, normalize_path, truncate_description};
use serde::Serialize;
use url::Url;

const DEFAULT_OG_TYPE: &str = "website";
const DEFAULT_OG_IMAGE_WIDTH: u32 = 1200;
const DEFAULT_OG_IMAGE_HEIGHT: u32 = 630;
const MANIFEST_PATH: &str = "/manifest.webmanifest";

/// Per-page overrides
#[derive(Debug, Clone, Default)]
pub struct MetadataArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub pathname: Option<String>,
    pub locale: Option<String>,
    pub no_index: bool,
    pub no_follow: bool,
}

impl MetadataArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    pub fn with_pathname(mut self, pathname: &str) -> Self {
        self.pathname = Some(pathname.to_string());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn no_index(mut self, value: bool) -> Self {
        self.no_index = value;
        self
    }

    pub fn no_follow(mut self, value: bool) -> Self {
        self.no_follow = value;
        self
    }
}

/// A `<link rel="icon">` style entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconLink {
    pub url: String,
    pub rel: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Alternates {
    pub canonical: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OpenGraphImage>,
    pub locale: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RobotsDirectives {
    pub index: bool,
    pub follow: bool,
}

/// Complete metadata for one page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub metadata_base: String,
    pub alternates: Alternates,
    pub manifest: String,
    pub icons: Vec<IconLink>,
    pub authors: Vec<AuthorRef>,
    pub creator: String,
    pub publisher: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: RobotsDirectives,
}

/// Build page metadata from site defaults and per-page overrides
pub fn construct_metadata(
    config: &SiteConfig,
    args: MetadataArgs,
) -> Result<Metadata, ConfigError> {
    let title = args.title.unwrap_or_else(|| config.name.clone());
    let description = args.description.unwrap_or_else(|| config.description.clone());
    let image = args
        .image
        .unwrap_or_else(|| config.og_image_path().to_string());
    let locale = args
        .locale
        .unwrap_or_else(|| config.default_locale().to_string());

    let path = normalize_path(args.pathname.as_deref());
    let canonical = canonical_url(config.canonical_base(), &path)?;
    let description = truncate_description(&description, MAX_DESCRIPTION_LENGTH);

    ::log::debug!("Constructing metadata for {}", canonical);

    let open_graph = OpenGraph {
        og_type: config
            .og
            .og_type
            .clone()
            .unwrap_or_else(|| DEFAULT_OG_TYPE.to_string()),
        title: title.clone(),
        description: description.clone(),
        url: canonical.clone(),
        site_name: config.og.site_name.clone().unwrap_or_else(|| config.name.clone()),
        images: vec![OpenGraphImage {
            url: image.clone(),
            width: config.og.image_width.unwrap_or(DEFAULT_OG_IMAGE_WIDTH),
            height: config.og.image_height.unwrap_or(DEFAULT_OG_IMAGE_HEIGHT),
            alt: description.clone(),
        }],
        locale: config
            .og
            .locale
            .clone()
            .unwrap_or_else(|| format!("{}_{}", locale, locale.to_uppercase())),
    };

    let twitter = TwitterCard {
        card: "summary_large_image".to_string(),
        title: title.clone(),
        description: description.clone(),
        images: vec![image],
        creator: config.seo.social.twitter.clone(),
    };

    let robots = RobotsDirectives {
        index: !args.no_index && config.page_defaults.robots_index.unwrap_or(true),
        follow: !args.no_follow && config.page_defaults.robots_follow.unwrap_or(true),
    };

    Ok(Metadata {
        title,
        description,
        metadata_base: config.base_url()?.to_string(),
        alternates: Alternates { canonical },
        manifest: MANIFEST_PATH.to_string(),
        icons: icon_links(&config.icons),
        authors: vec![AuthorRef {
            name: config.author.name.clone(),
            url: config.author.url.clone(),
        }],
        creator: config.creator.clone(),
        publisher: config.creator.clone(),
        open_graph,
        twitter,
        robots,
    })
}

/// Resolve a normalized path against the canonical base
pub fn canonical_url(base: &str, path: &str) -> Result<String, ConfigError> {
    let base = Url::parse(base).map_err(|e| ConfigError::InvalidUrl(base.to_string(), e))?;
    let joined = base
        .join(path)
        .map_err(|e| ConfigError::InvalidUrl(path.to_string(), e))?;
    Ok(joined.to_string())
}

/// Configured icons as head links; blank entries are skipped
pub fn icon_links(icons: &IconsConfig) -> Vec<IconLink> {
    let candidates = [
        (&icons.favicon_any, "icon", "any", "image/x-icon"),
        (&icons.icon32, "icon", "32x32", "image/png"),
        (&icons.icon48, "icon", "48x48", "image/png"),
        (&icons.icon192, "icon", "192x192", "image/png"),
        (&icons.icon512, "icon", "512x512", "image/png"),
        (&icons.apple_touch, "apple-touch-icon", "180x180", "image/png"),
    ];

    candidates
        .into_iter()
        .filter_map(|(url, rel, sizes, mime_type)| {
            let url = url.as_deref().filter(|u| !u.is_empty())?;
            Some(IconLink {
                url: url.to_string(),
                rel: rel.to_string(),
                sizes: sizes.to_string(),
                mime_type: mime_type.to_string(),
            })
        })
        .collect()
}
