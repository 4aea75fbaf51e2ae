//! Sitemap generation.
//!
//! Filters flattened content pages down to those a search engine may index,
//! resolves a last-modified date for each and joins them to the site URL.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::config::SiteConfig;
use crate::content::{GUEST_ROLE, PageNode};
use crate::utils::join_url;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Naive timestamp layouts accepted after RFC 3339, read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Configuration for sitemap filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapFilterConfig {
    /// Public base URL every path is joined to
    pub base_url: String,

    /// Path prefixes that must never be listed
    #[serde(default)]
    pub disallow_paths: Vec<String>,
}

impl SitemapFilterConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            disallow_paths: Vec::new(),
        }
    }

    /// Take the base URL and disallow list from the site configuration
    pub fn from_site(config: &SiteConfig) -> Self {
        Self {
            base_url: config.url.clone(),
            disallow_paths: config.seo.disallow_paths.clone(),
        }
    }
}

/// One `<url>` entry of the sitemap
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    /// Absolute URL
    pub url: String,
    pub last_modified: DateTime<Utc>,
}

/// Ordered sitemap entries, ready for serialization
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

/// Decides which pages are listed and how their URLs are built
#[derive(Debug, Clone)]
pub struct SitemapFilter {
    config: SitemapFilterConfig,
}

impl SitemapFilter {
    pub fn new(config: SitemapFilterConfig) -> Self {
        Self { config }
    }

    pub fn from_site(config: &SiteConfig) -> Self {
        Self::new(SitemapFilterConfig::from_site(config))
    }

    /// Determine if a page may appear in the sitemap
    pub fn is_indexable(&self, page: &PageNode) -> bool {
        if !page.has_role(GUEST_ROLE) || !page.is_published {
            return false;
        }

        match page.href.as_deref() {
            Some(href) if is_valid_href(href) => !self.is_disallowed(href),
            _ => false,
        }
    }

    /// Check a path against the disallow prefixes
    pub fn is_disallowed(&self, href: &str) -> bool {
        self.config
            .disallow_paths
            .iter()
            .filter(|rule| !rule.is_empty())
            .any(|rule| href.starts_with(rule.as_str()))
    }

    /// Absolute URL for a site path
    pub fn abs_url(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    /// Build the sitemap, using the current time where no date is known
    pub fn build(&self, pages: &[&PageNode]) -> Sitemap {
        self.build_at(pages, Utc::now())
    }

    /// Build the sitemap with an explicit "now".
    ///
    /// The home URL is always present exactly once: kept where content lists
    /// it first, otherwise inserted at the front.
    pub fn build_at(&self, pages: &[&PageNode], now: DateTime<Utc>) -> Sitemap {
        let home = self.abs_url("/");
        let mut entries: Vec<SitemapEntry> = Vec::with_capacity(pages.len() + 1);
        let mut has_home = false;

        for page in pages.iter().filter(|p| self.is_indexable(p)) {
            let Some(href) = page.href.as_deref() else {
                continue;
            };
            let url = self.abs_url(href);
            if url == home {
                if has_home {
                    ::log::debug!("Dropping duplicate home entry from {}", href);
                    continue;
                }
                has_home = true;
            }
            entries.push(SitemapEntry {
                url,
                last_modified: resolve_last_modified(page, now),
            });
        }

        if !has_home {
            entries.insert(
                0,
                SitemapEntry {
                    url: home,
                    last_modified: now,
                },
            );
        }

        ::log::info!(
            "Sitemap has {} entries from {} candidate pages",
            entries.len(),
            pages.len()
        );
        Sitemap { entries }
    }
}

impl Sitemap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generate sitemap XML string
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in &self.entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// A usable href is a non-empty site path
fn is_valid_href(href: &str) -> bool {
    href.starts_with('/')
}

/// Pick the first parseable of `updatedAt` and `createdAt`, else `now`.
///
/// An unparsable `updatedAt` falls through to `createdAt` rather than to `now`.
pub fn resolve_last_modified(page: &PageNode, now: DateTime<Utc>) -> DateTime<Utc> {
    [page.updated_at.as_deref(), page.created_at.as_deref()]
        .into_iter()
        .flatten()
        .find_map(parse_date)
        .unwrap_or(now)
}

/// Parse an ISO-8601 date or timestamp; naive values are taken as UTC
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }

    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc());
    if parsed.is_none() {
        ::log::debug!("Unparsable date {:?}", value);
    }
    parsed
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap()
    }

    fn filter(disallow: &[&str]) -> SitemapFilter {
        let mut config = SitemapFilterConfig::new("https://example.com/");
        config.disallow_paths = disallow.iter().map(|s| s.to_string()).collect();
        SitemapFilter::new(config)
    }

    fn urls(sitemap: &Sitemap) -> Vec<&str> {
        sitemap.entries.iter().map(|e| e.url.as_str()).collect()
    }

    #[test]
    fn test_indexable_page() {
        assert!(filter(&[]).is_indexable(&PageNode::new("/about")));
    }

    #[test]
    fn test_excluded_pages() {
        let f = filter(&["/admin"]);

        let mut no_guest = PageNode::new("/members");
        no_guest.roles = vec!["user".to_string()];
        assert!(!f.is_indexable(&no_guest));

        let mut unpublished = PageNode::new("/draft");
        unpublished.is_published = false;
        assert!(!f.is_indexable(&unpublished));

        let mut missing_href = PageNode::new("/");
        missing_href.href = None;
        assert!(!f.is_indexable(&missing_href));

        assert!(!f.is_indexable(&PageNode::new("")));
        assert!(!f.is_indexable(&PageNode::new("relative/path")));
        assert!(!f.is_indexable(&PageNode::new("/admin/settings")));
        assert!(!f.is_indexable(&PageNode::new("/administrator")));
    }

    #[test]
    fn test_empty_disallow_rule_blocks_nothing() {
        assert!(filter(&[""]).is_indexable(&PageNode::new("/about")));
    }

    #[test]
    fn test_last_modified_prefers_updated() {
        let mut page = PageNode::new("/a");
        page.updated_at = Some("2024-03-01T10:00:00Z".to_string());
        page.created_at = Some("2024-01-01T00:00:00Z".to_string());
        assert_eq!(
            resolve_last_modified(&page, fixed_now()),
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_last_modified_falls_back_to_created() {
        let mut page = PageNode::new("/a");
        page.updated_at = None;
        page.created_at = Some("2024-01-01T00:00:00Z".to_string());
        assert_eq!(
            resolve_last_modified(&page, fixed_now()),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );

        page.updated_at = Some("not a date".to_string());
        assert_eq!(
            resolve_last_modified(&page, fixed_now()),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_last_modified_defaults_to_now() {
        let page = PageNode::new("/a");
        assert_eq!(resolve_last_modified(&page, fixed_now()), fixed_now());

        let mut garbage = PageNode::new("/b");
        garbage.updated_at = Some("2024-13-45".to_string());
        garbage.created_at = Some(String::new());
        assert_eq!(resolve_last_modified(&garbage, fixed_now()), fixed_now());
    }

    #[test]
    fn test_last_modified_uses_wall_clock() {
        let before = Utc::now();
        let sitemap = filter(&[]).build(&[&PageNode::new("/a")]);
        let after = Utc::now();

        for entry in &sitemap.entries {
            assert!(entry.last_modified >= before && entry.last_modified <= after);
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-01-01"), Some(midnight));
        assert_eq!(parse_date("2024-01-01T00:00:00"), Some(midnight));
        assert_eq!(parse_date("2024-01-01T00:00"), Some(midnight));
        assert_eq!(parse_date("2024-01-01T02:00:00+02:00"), Some(midnight));
        assert_eq!(parse_date("2024-01-01T00:00:00.000Z"), Some(midnight));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_root_injected_when_missing() {
        let pages = [PageNode::new("/about")];
        let refs: Vec<&PageNode> = pages.iter().collect();
        let sitemap = filter(&[]).build_at(&refs, fixed_now());

        assert_eq!(urls(&sitemap), vec!["https://example.com/", "https://example.com/about"]);
        assert_eq!(sitemap.entries[0].last_modified, fixed_now());
    }

    #[test]
    fn test_root_present_exactly_once() {
        let mut home = PageNode::new("/");
        home.updated_at = Some("2024-05-05".to_string());
        let pages = [PageNode::new("/about"), home, PageNode::new("//")];
        let refs: Vec<&PageNode> = pages.iter().collect();
        let sitemap = filter(&[]).build_at(&refs, fixed_now());

        assert_eq!(urls(&sitemap), vec!["https://example.com/about", "https://example.com/"]);
        assert_eq!(
            sitemap.entries[1].last_modified,
            Utc.with_ymd_and_hms(2024, 5, 5, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_empty_input_still_has_root() {
        let sitemap = filter(&[]).build_at(&[], fixed_now());
        assert_eq!(urls(&sitemap), vec!["https://example.com/"]);
    }

    #[test]
    fn test_disallowed_root_is_still_listed() {
        let sitemap = filter(&["/"]).build_at(&[&PageNode::new("/about")], fixed_now());
        assert_eq!(urls(&sitemap), vec!["https://example.com/"]);
    }

    #[test]
    fn test_abs_url_has_no_double_slash() {
        assert_eq!(filter(&[]).abs_url("about"), "https://example.com/about");
        assert_eq!(filter(&[]).abs_url("/about"), "https://example.com/about");

        let nested = SitemapFilter::new(SitemapFilterConfig::new("https://example.com//base/"));
        assert_eq!(nested.abs_url("/blog//post"), "https://example.com/base/blog/post");
    }

    #[test]
    fn test_sitemap_xml() {
        let sitemap = Sitemap {
            entries: vec![SitemapEntry {
                url: "https://example.com/search?q=a&b=c".to_string(),
                last_modified: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            }],
        };
        let xml = sitemap.to_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert_eq!(lines[1], format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
        assert!(xml.contains("<lastmod>2025-01-01T00:00:00Z</lastmod>"));
        assert_eq!(xml.matches("<url>").count(), 1);
        assert_eq!(lines.last().map(|l| l.trim()), Some("</urlset>"));
    }

    #[test]
    fn test_sitemap_json_shape() {
        let sitemap = Sitemap {
            entries: vec![SitemapEntry {
                url: "https://example.com/".to_string(),
                last_modified: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            }],
        };
        let json = serde_json::to_value(&sitemap).unwrap();
        assert_eq!(json[0]["url"], "https://example.com/");
        assert_eq!(json[0]["lastModified"], "2025-01-01T00:00:00Z");
    }
}
