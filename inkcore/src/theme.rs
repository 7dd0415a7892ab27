//! Reading theme — light surface, square corners
//!
//! The article area is colored by the reader's own settings; the theme
//! only fixes the chrome: text styles, spacing, 1px outlines, and the
//! optional article fonts loaded from disk.

use egui::{
    Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle,
    Visuals,
};

/// Chrome palette. The article surface itself is settings-driven.
pub struct InkColors;

impl InkColors {
    pub const PAPER: Color32 = Color32::from_rgb(255, 255, 255);
    pub const INK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const HOVER: Color32 = Color32::from_rgb(232, 232, 232);
}

/// Theme configuration for the reader
pub struct ReaderTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub panel_padding: f32,
    pub item_spacing: f32,
}

impl Default for ReaderTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            panel_padding: 8.0,
            item_spacing: 6.0,
        }
    }
}

impl ReaderTheme {
    /// Load a font file from disk (searched relative to the exe and
    /// standard font paths). Fonts are not embedded in the binary, so a
    /// missing file simply means the family stays unregistered.
    fn load_font_file(file_name: &str) -> Option<Vec<u8>> {
        let mut search_paths = Vec::new();

        // Relative to executable
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                search_paths.push(dir.join("fonts").join(file_name));
                search_paths.push(dir.join(file_name));
                // Cargo workspace: exe is in target/debug or target/release
                if let Some(parent) = dir.parent() {
                    if let Some(grandparent) = parent.parent() {
                        search_paths.push(grandparent.join("fonts").join(file_name));
                    }
                }
            }
        }

        // Standard system paths
        search_paths.push(std::path::PathBuf::from("/usr/share/inkread/fonts").join(file_name));
        search_paths.push(std::path::PathBuf::from("/usr/share/fonts").join(file_name));

        for path in search_paths {
            if let Ok(data) = std::fs::read(&path) {
                return Some(data);
            }
        }
        None
    }

    /// Apply the reader theme to an egui context and register the given
    /// article fonts.
    ///
    /// `families` pairs a family key with the font file to look for.
    /// Returns the keys that were actually found and registered; the
    /// style resolver falls back to the default proportional family for
    /// anything missing from that list.
    pub fn apply(&self, ctx: &egui::Context, families: &[(String, String)]) -> Vec<String> {
        // --- fonts ---
        let mut fonts = FontDefinitions::default();
        let mut registered = Vec::new();

        for (key, file_name) in families {
            let Some(data) = Self::load_font_file(file_name) else {
                continue;
            };
            fonts
                .font_data
                .insert(key.clone(), FontData::from_owned(data));
            // Each article font becomes its own named family, falling
            // back to the default proportional chain for missing glyphs.
            let mut chain = vec![key.clone()];
            if let Some(default_chain) = fonts.families.get(&FontFamily::Proportional) {
                chain.extend(default_chain.iter().cloned());
            }
            fonts
                .families
                .insert(FontFamily::Name(key.as_str().into()), chain);
            registered.push(key.clone());
        }
        ctx.set_fonts(fonts);

        // --- style ---
        let mut style = Style::default();

        style.text_styles = [
            (
                TextStyle::Small,
                FontId::new(self.font_size_small, FontFamily::Proportional),
            ),
            (
                TextStyle::Body,
                FontId::new(self.font_size_body, FontFamily::Proportional),
            ),
            (
                TextStyle::Button,
                FontId::new(self.font_size_body, FontFamily::Proportional),
            ),
            (
                TextStyle::Heading,
                FontId::new(self.font_size_heading, FontFamily::Proportional),
            ),
            (
                TextStyle::Monospace,
                FontId::new(self.font_size_body, FontFamily::Monospace),
            ),
        ]
        .into();

        // --- visuals: flat, square, outlined ---
        let mut visuals = Visuals::light();

        visuals.panel_fill = InkColors::PAPER;
        visuals.window_fill = InkColors::PAPER;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, InkColors::INK);

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = InkColors::PAPER;
            ws.bg_stroke = Stroke::new(1.0, InkColors::INK);
            ws.fg_stroke = Stroke::new(1.0, InkColors::INK);
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);
        visuals.widgets.hovered.bg_fill = InkColors::HOVER;

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.panel_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        ctx.set_style(style);

        registered
    }
}
