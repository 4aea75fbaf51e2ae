//! HTTP response headers keyed by path patterns.
//!
//! Patterns use the `/:param` syntax: `:name` matches one path segment,
//! `:name*` any remainder (including nothing), `:name+` a non-empty
//! remainder and `:name?` an optional segment.

use crate::config::{HeaderEntry, HeaderRuleConfig, SiteConfig};
use crate::error::ConfigError;
use regex::Regex;

/// Pattern matching every path
pub const ALL_PATHS: &str = "/:path*";

/// Path the sitemap is served from
pub const SITEMAP_PATH: &str = "/sitemap.xml";

/// Headers applied to every response when the config defines none
pub fn default_rules() -> Vec<HeaderRuleConfig> {
    vec![HeaderRuleConfig {
        source: ALL_PATHS.to_string(),
        headers: vec![
            HeaderEntry::new("X-Content-Type-Options", "nosniff"),
            HeaderEntry::new("X-Frame-Options", "SAMEORIGIN"),
        ],
    }]
}

/// `Cache-Control` for the sitemap response, from the revalidation interval
pub fn sitemap_cache_control(revalidate_secs: u64) -> HeaderEntry {
    HeaderEntry {
        key: "Cache-Control".to_string(),
        value: format!("public, max-age={}, stale-while-revalidate", revalidate_secs),
    }
}

/// A compiled header rule
#[derive(Debug)]
pub struct HeaderRule {
    pattern: Regex,
    headers: Vec<HeaderEntry>,
}

impl HeaderRule {
    pub fn new(config: HeaderRuleConfig) -> Result<Self, ConfigError> {
        let pattern = compile_source(&config.source)?;
        Ok(Self {
            pattern,
            headers: config.headers,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

/// All header rules of a site, in declaration order
#[derive(Debug)]
pub struct SecurityHeaders {
    rules: Vec<HeaderRule>,
}

impl SecurityHeaders {
    pub fn new(rules: Vec<HeaderRuleConfig>) -> Result<Self, ConfigError> {
        let rules = rules
            .into_iter()
            .map(HeaderRule::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Rules from the site config, or the defaults when none are configured,
    /// followed by the sitemap's `Cache-Control` rule
    pub fn from_site(config: &SiteConfig) -> Result<Self, ConfigError> {
        let mut rules = if config.headers.is_empty() {
            default_rules()
        } else {
            config.headers.clone()
        };
        rules.push(HeaderRuleConfig {
            source: SITEMAP_PATH.to_string(),
            headers: vec![sitemap_cache_control(config.seo.revalidate)],
        });
        Self::new(rules)
    }

    /// Headers of every rule matching `path`, in rule order
    pub fn headers_for(&self, path: &str) -> Vec<&HeaderEntry> {
        let headers: Vec<&HeaderEntry> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(path))
            .flat_map(|rule| rule.headers.iter())
            .collect();

        ::log::debug!("{} headers apply to {}", headers.len(), path);
        headers
    }
}

/// Translate a `/:param` source pattern into an anchored regex
fn compile_source(source: &str) -> Result<Regex, ConfigError> {
    let mut re = String::from("^");
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ':' {
            re.push_str(&regex::escape(&c.to_string()));
            continue;
        }

        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if name.is_empty() {
            return Err(ConfigError::Validation(format!(
                "unnamed parameter in header source `{}`",
                source
            )));
        }

        let modifier = chars.next_if(|&c| matches!(c, '*' | '+' | '?'));
        let leading_slash = re.ends_with('/');
        if leading_slash {
            re.pop();
        }
        let slash = if leading_slash { "/" } else { "" };

        match modifier {
            Some('*') => re.push_str(&format!("(?:{}.*)?", slash)),
            Some('+') => re.push_str(&format!("{}.+", slash)),
            Some('?') => re.push_str(&format!("(?:{}[^/]+)?", slash)),
            _ => re.push_str(&format!("{}[^/]+", slash)),
        }
    }
    re.push('$');

    Regex::new(&re).map_err(|e| ConfigError::InvalidPattern(source.to_string(), e))
}
