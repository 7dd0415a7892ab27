//! Style resolution — turns the settings' style tokens into egui values
//!
//! The settings export CSS-shaped tokens (`"18px"`, `"#C4C4C4"`). egui
//! wants numbers and `Color32`s, so the committed settings pass through
//! this total mapping on every frame. Catalog tokens always parse; the
//! fallbacks only exist to keep the mapping total.

use crate::params::ArticleSettings;
use egui::{Color32, FontFamily};

/// Parse a `<number>px` length token.
pub fn parse_px(token: &str) -> Option<f32> {
    token.strip_suffix("px")?.parse::<f32>().ok()
}

/// Parse a `#RRGGBB` color token.
pub fn parse_hex_color(token: &str) -> Option<Color32> {
    let hex = token.strip_prefix('#')?;
    // Length is in bytes; non-ASCII must be rejected before the fixed
    // slices below or they could land inside a multibyte char.
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Settings resolved into directly renderable values.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub font_family: FontFamily,
    pub font_size: f32,
    pub font_color: Color32,
    pub background: Color32,
    pub content_width: f32,
}

impl ResolvedStyle {
    const FALLBACK_FONT_SIZE: f32 = 18.0;
    const FALLBACK_WIDTH: f32 = 1394.0;

    /// Derive the renderable style from a settings value.
    ///
    /// Reads the settings through their named style variables — the same
    /// contract any other content view would consume. Only the font
    /// family needs the settings value itself, for its registered-family
    /// key; `registered` lists the keys the theme actually loaded, and
    /// families without a loaded font render in the default proportional
    /// face.
    pub fn from_settings(settings: &ArticleSettings, registered: &[String]) -> Self {
        let vars = settings.style_vars();
        let var = |name: &str| {
            vars.iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| *v)
                .unwrap_or("")
        };

        let font_family = settings
            .font_family
            .class
            .as_ref()
            .filter(|class| registered.iter().any(|r| r == *class))
            .map(|class| FontFamily::Name(class.as_str().into()))
            .unwrap_or(FontFamily::Proportional);

        Self {
            font_family,
            font_size: parse_px(var("--font-size")).unwrap_or(Self::FALLBACK_FONT_SIZE),
            font_color: parse_hex_color(var("--font-color")).unwrap_or(Color32::BLACK),
            background: parse_hex_color(var("--bg-color")).unwrap_or(Color32::WHITE),
            content_width: parse_px(var("--container-width")).unwrap_or(Self::FALLBACK_WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{font_size_options, ArticleSettings, SettingsField};

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("18px"), Some(18.0));
        assert_eq!(parse_px("1394px"), Some(1394.0));
        assert_eq!(parse_px("18.5px"), Some(18.5));
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px("18"), None);
        assert_eq!(parse_px("18em"), None);
        assert_eq!(parse_px(""), None);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#000000"), Some(Color32::from_rgb(0, 0, 0)));
        assert_eq!(
            parse_hex_color("#C4C4C4"),
            Some(Color32::from_rgb(196, 196, 196))
        );
        assert_eq!(
            parse_hex_color("#fd24af"),
            Some(Color32::from_rgb(253, 36, 175))
        );
        assert_eq!(parse_hex_color("000000"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#"), None);
        // Six bytes but not six ASCII digits — must not panic
        assert_eq!(parse_hex_color("#aééb"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_defaults_resolve() {
        let resolved = ResolvedStyle::from_settings(&ArticleSettings::default(), &[]);
        assert_eq!(resolved.font_size, 18.0);
        assert_eq!(resolved.font_color, Color32::from_rgb(0, 0, 0));
        assert_eq!(resolved.background, Color32::from_rgb(255, 255, 255));
        assert_eq!(resolved.content_width, 1394.0);
        // No fonts registered: default face
        assert_eq!(resolved.font_family, FontFamily::Proportional);
    }

    #[test]
    fn test_registered_family_resolves_by_class() {
        let settings = ArticleSettings::default();
        let class = settings.font_family.class.clone().unwrap();

        let with_font = ResolvedStyle::from_settings(&settings, std::slice::from_ref(&class));
        assert_eq!(with_font.font_family, FontFamily::Name(class.into()));

        let other = ResolvedStyle::from_settings(&settings, &["something-else".to_string()]);
        assert_eq!(other.font_family, FontFamily::Proportional);
    }

    #[test]
    fn test_every_catalog_token_parses() {
        for field in SettingsField::ALL {
            for option in field.catalog() {
                match field {
                    SettingsField::FontSize | SettingsField::ContentWidth => {
                        assert!(parse_px(&option.value).is_some(), "{}", option.value);
                    }
                    SettingsField::FontColor | SettingsField::BackgroundColor => {
                        assert!(parse_hex_color(&option.value).is_some(), "{}", option.value);
                    }
                    SettingsField::FontFamily => {
                        assert!(option.class.is_some());
                    }
                }
            }
        }
    }

    #[test]
    fn test_resolution_follows_style_vars() {
        // The resolver consumes the named-variable contract: whatever
        // the variables say is what gets rendered.
        let mut settings = ArticleSettings::default();
        settings.set(
            SettingsField::BackgroundColor,
            SettingsField::BackgroundColor.catalog()[1].clone(),
        );
        settings.set(
            SettingsField::ContentWidth,
            SettingsField::ContentWidth.catalog()[1].clone(),
        );

        let vars = settings.style_vars();
        let var = |name: &str| {
            vars.iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| *v)
                .unwrap()
        };
        let resolved = ResolvedStyle::from_settings(&settings, &[]);

        assert_eq!(Some(resolved.font_size), parse_px(var("--font-size")));
        assert_eq!(
            Some(resolved.font_color),
            parse_hex_color(var("--font-color"))
        );
        assert_eq!(Some(resolved.background), parse_hex_color(var("--bg-color")));
        assert_eq!(
            Some(resolved.content_width),
            parse_px(var("--container-width"))
        );
    }

    #[test]
    fn test_selected_size_resolves() {
        let mut settings = ArticleSettings::default();
        let larger = font_size_options()
            .into_iter()
            .find(|o| o.value == "24px")
            .unwrap();
        settings.set(SettingsField::FontSize, larger);
        let resolved = ResolvedStyle::from_settings(&settings, &[]);
        assert_eq!(resolved.font_size, 24.0);
    }
}
