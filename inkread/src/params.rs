//! Article appearance settings — option catalogs, defaults, style variables
//!
//! Every selectable value lives in one of five fixed catalogs. The
//! settings value applied to the article is always assembled from
//! catalog members, so there is no invalid-option path anywhere.

use serde::{Deserialize, Serialize};

/// One selectable choice within a settings category.
///
/// `title` is the label shown in the controls, `value` the style token
/// exported through [`ArticleSettings::style_vars`], and `class` an
/// optional font-family key used to preview and resolve a registered
/// font.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOption {
    pub title: String,
    pub value: String,
    pub class: Option<String>,
}

impl StyleOption {
    fn new(title: &str, value: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            class: None,
        }
    }

    fn with_class(title: &str, value: &str, class: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            class: Some(class.to_string()),
        }
    }
}

/// Font family catalog. `class` doubles as the registered family key.
pub fn font_family_options() -> Vec<StyleOption> {
    vec![
        StyleOption::with_class("Open Sans", "'Open Sans', sans-serif", "open-sans"),
        StyleOption::with_class("Ubuntu", "'Ubuntu', sans-serif", "ubuntu"),
        StyleOption::with_class(
            "Cormorant Garamond",
            "'Cormorant Garamond', serif",
            "cormorant-garamond",
        ),
        StyleOption::with_class("Days One", "'Days One', sans-serif", "days-one"),
        StyleOption::with_class("Merriweather", "'Merriweather', serif", "merriweather"),
    ]
}

pub fn font_size_options() -> Vec<StyleOption> {
    vec![
        StyleOption::new("18px", "18px"),
        StyleOption::new("24px", "24px"),
        StyleOption::new("38px", "38px"),
    ]
}

pub fn font_color_options() -> Vec<StyleOption> {
    vec![
        StyleOption::new("black", "#000000"),
        StyleOption::new("white", "#FFFFFF"),
        StyleOption::new("gray", "#C4C4C4"),
        StyleOption::new("pink", "#FD24AF"),
        StyleOption::new("turquoise", "#38D9A9"),
        StyleOption::new("green", "#84D600"),
    ]
}

pub fn background_color_options() -> Vec<StyleOption> {
    vec![
        StyleOption::new("white", "#FFFFFF"),
        StyleOption::new("slate", "#232630"),
        StyleOption::new("gray", "#C4C4C4"),
        StyleOption::new("rose", "#FEAFE8"),
        StyleOption::new("mint", "#C1FFD4"),
        StyleOption::new("lemon", "#FEFC83"),
    ]
}

pub fn content_width_options() -> Vec<StyleOption> {
    vec![
        StyleOption::new("wide", "1394px"),
        StyleOption::new("narrow", "948px"),
    ]
}

/// The five settings categories, in panel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl SettingsField {
    pub const ALL: [SettingsField; 5] = [
        SettingsField::FontFamily,
        SettingsField::FontSize,
        SettingsField::FontColor,
        SettingsField::BackgroundColor,
        SettingsField::ContentWidth,
    ];

    /// Control title shown above the field in the panel
    pub fn title(self) -> &'static str {
        match self {
            SettingsField::FontFamily => "font",
            SettingsField::FontSize => "font size",
            SettingsField::FontColor => "font color",
            SettingsField::BackgroundColor => "background color",
            SettingsField::ContentWidth => "content width",
        }
    }

    /// The fixed catalog this field selects from
    pub fn catalog(self) -> Vec<StyleOption> {
        match self {
            SettingsField::FontFamily => font_family_options(),
            SettingsField::FontSize => font_size_options(),
            SettingsField::FontColor => font_color_options(),
            SettingsField::BackgroundColor => background_color_options(),
            SettingsField::ContentWidth => content_width_options(),
        }
    }
}

/// The full set of article appearance selections.
///
/// Replaced wholesale on apply/reset, never partially mutated from the
/// outside; [`ArticleSettings::set`] exists for the panel's draft copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSettings {
    pub font_family: StyleOption,
    pub font_size: StyleOption,
    pub font_color: StyleOption,
    pub background_color: StyleOption,
    pub content_width: StyleOption,
}

impl Default for ArticleSettings {
    fn default() -> Self {
        // The first entry of each catalog: Open Sans, 18px, black on
        // white, wide column.
        Self {
            font_family: font_family_options().remove(0),
            font_size: font_size_options().remove(0),
            font_color: font_color_options().remove(0),
            background_color: background_color_options().remove(0),
            content_width: content_width_options().remove(0),
        }
    }
}

impl ArticleSettings {
    pub fn get(&self, field: SettingsField) -> &StyleOption {
        match field {
            SettingsField::FontFamily => &self.font_family,
            SettingsField::FontSize => &self.font_size,
            SettingsField::FontColor => &self.font_color,
            SettingsField::BackgroundColor => &self.background_color,
            SettingsField::ContentWidth => &self.content_width,
        }
    }

    /// Replace exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: SettingsField, option: StyleOption) {
        match field {
            SettingsField::FontFamily => self.font_family = option,
            SettingsField::FontSize => self.font_size = option,
            SettingsField::FontColor => self.font_color = option,
            SettingsField::BackgroundColor => self.background_color = option,
            SettingsField::ContentWidth => self.content_width = option,
        }
    }

    /// The named style variables the content view reads.
    ///
    /// The names are a fixed contract; the values are the current
    /// selections' raw tokens.
    pub fn style_vars(&self) -> [(&'static str, &str); 5] {
        [
            ("--font-family", self.font_family.value.as_str()),
            ("--font-size", self.font_size.value.as_str()),
            ("--font-color", self.font_color.value.as_str()),
            ("--container-width", self.content_width.value.as_str()),
            ("--bg-color", self.background_color.value.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_every_catalog() {
        let defaults = ArticleSettings::default();
        for field in SettingsField::ALL {
            let catalog = field.catalog();
            assert!(
                catalog.contains(defaults.get(field)),
                "default for {:?} not in its catalog",
                field
            );
            assert!(!catalog.is_empty());
        }
    }

    #[test]
    fn test_set_replaces_only_that_field() {
        // For every field and every option in its catalog, setting that
        // option changes the field and nothing else.
        for field in SettingsField::ALL {
            for option in field.catalog() {
                let before = ArticleSettings::default();
                let mut after = before.clone();
                after.set(field, option.clone());
                for other in SettingsField::ALL {
                    if other == field {
                        assert_eq!(after.get(other), &option);
                    } else {
                        assert_eq!(after.get(other), before.get(other));
                    }
                }
            }
        }
    }

    #[test]
    fn test_style_var_names() {
        let defaults = ArticleSettings::default();
        let vars = defaults.style_vars();
        let names: Vec<&str> = vars.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "--font-family",
                "--font-size",
                "--font-color",
                "--container-width",
                "--bg-color"
            ]
        );
    }

    #[test]
    fn test_font_size_var_follows_selection() {
        let mut settings = ArticleSettings::default();
        assert_eq!(settings.font_size.value, "18px");

        let larger = font_size_options()
            .into_iter()
            .find(|o| o.title == "24px")
            .unwrap();
        settings.set(SettingsField::FontSize, larger);

        let size = settings
            .style_vars()
            .iter()
            .find(|(n, _)| *n == "--font-size")
            .map(|(_, v)| v.to_string())
            .unwrap();
        assert_eq!(size, "24px");
    }
}
