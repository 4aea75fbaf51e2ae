//! Theme color helpers for the PWA install prompt and browser chrome.

use crate::config::PwaConfig;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// CSS fallback used when a theme variable has no computed value
pub const DEFAULT_CSS_VARIABLE: &str = "var(--primary, #3b82f6)";

/// RGB triplet of the default primary color (Tailwind blue-500)
pub const DEFAULT_PRIMARY_RGB: &str = "59, 130, 246";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
}

impl ThemeColors {
    /// Colors for the given scheme without any computed CSS values
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        Self::with_computed(scheme, None, None)
    }

    /// Colors for the given scheme, preferring computed `--primary` and `--accent` values
    pub fn with_computed(scheme: ColorScheme, primary: Option<&str>, accent: Option<&str>) -> Self {
        let (background, foreground) = match scheme {
            ColorScheme::Dark => (
                "hsl(var(--background-dark, 240 10% 3.9%))",
                "hsl(var(--foreground-dark, 0 0% 98%))",
            ),
            ColorScheme::Light => (
                "hsl(var(--background, 0 0% 100%))",
                "hsl(var(--foreground, 0 0% 3.6%))",
            ),
        };

        Self {
            primary: css_variable(primary),
            accent: css_variable(accent),
            background: background.to_string(),
            foreground: foreground.to_string(),
        }
    }
}

/// Browser theme color: the theme color for dark mode, the background color otherwise
pub fn pwa_theme_color(pwa: &PwaConfig, scheme: ColorScheme) -> &str {
    match scheme {
        ColorScheme::Dark => &pwa.theme_color,
        ColorScheme::Light => &pwa.background_color,
    }
}

/// A computed CSS variable value, or the primary fallback when blank
pub fn css_variable(computed: Option<&str>) -> String {
    computed
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_CSS_VARIABLE)
        .to_string()
}

/// Convert `#rrggbb` into `"r, g, b"` for use inside `rgba()`
pub fn primary_color_rgb(color: Option<&str>) -> String {
    static RE_HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})")
            .expect("Hex color pattern should be valid")
    });

    let Some(caps) = color.map(str::trim).and_then(|c| RE_HEX_COLOR.captures(c)) else {
        return DEFAULT_PRIMARY_RGB.to_string();
    };

    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).unwrap_or_default();
    format!("{}, {}, {}", channel(1), channel(2), channel(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwa_theme_color() {
        let pwa = PwaConfig {
            theme_color: "#111111".to_string(),
            background_color: "#fafafa".to_string(),
            ..PwaConfig::default()
        };
        assert_eq!(pwa_theme_color(&pwa, ColorScheme::Dark), "#111111");
        assert_eq!(pwa_theme_color(&pwa, ColorScheme::Light), "#fafafa");
    }

    #[test]
    fn test_css_variable_fallback() {
        assert_eq!(css_variable(None), DEFAULT_CSS_VARIABLE);
        assert_eq!(css_variable(Some("   ")), DEFAULT_CSS_VARIABLE);
        assert_eq!(css_variable(Some(" #ff0000 ")), "#ff0000");
    }

    #[test]
    fn test_primary_color_rgb() {
        assert_eq!(primary_color_rgb(Some("#3b82f6")), "59, 130, 246");
        assert_eq!(primary_color_rgb(Some("#FF0080")), "255, 0, 128");
        assert_eq!(primary_color_rgb(Some("hsl(0 0% 0%)")), DEFAULT_PRIMARY_RGB);
        assert_eq!(primary_color_rgb(Some("#fff")), DEFAULT_PRIMARY_RGB);
        assert_eq!(primary_color_rgb(None), DEFAULT_PRIMARY_RGB);
    }

    #[test]
    fn test_theme_colors_by_scheme() {
        let light = ThemeColors::for_scheme(ColorScheme::Light);
        assert_eq!(light.primary, DEFAULT_CSS_VARIABLE);
        assert_eq!(light.background, "hsl(var(--background, 0 0% 100%))");

        let dark = ThemeColors::with_computed(ColorScheme::Dark, Some("#000"), None);
        assert_eq!(dark.primary, "#000");
        assert_eq!(dark.accent, DEFAULT_CSS_VARIABLE);
        assert_eq!(dark.foreground, "hsl(var(--foreground-dark, 0 0% 98%))");
    }
}
