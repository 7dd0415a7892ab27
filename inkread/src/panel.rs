//! Settings side panel — draft state, apply/reset, dismissal
//!
//! The panel edits a draft copy of the settings; the committed copy in
//! the app root only changes when the caller receives a [`PanelEvent`].
//! Escape and outside-press dismissal are evaluated per frame, and only
//! while the panel is open.

use crate::params::{ArticleSettings, SettingsField, StyleOption};
use egui::{FontFamily, Key, RichText, Stroke};
use inkcore::theme::InkColors;
use inkcore::widgets::{self, ArrowButton, ButtonVariant, FormButton};

pub const PANEL_WIDTH: f32 = 280.0;

/// What the panel asks the app root to do with the committed settings.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    /// Replace the committed settings with this draft
    Apply(ArticleSettings),
    /// Restore the committed settings to the default value
    Reset,
}

/// Where a pointer press landed this frame, relative to the panel (the
/// arrow toggle counts as inside — it has its own click handling).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
    Inside,
    Outside,
}

pub struct ParamsPanel {
    is_open: bool,
    draft: ArticleSettings,
    /// Font-family keys the theme registered, for dropdown previews
    registered_fonts: Vec<String>,
}

impl ParamsPanel {
    /// The panel starts open, with the draft seeded from the committed
    /// settings.
    pub fn new(committed: &ArticleSettings, registered_fonts: Vec<String>) -> Self {
        Self {
            is_open: true,
            draft: committed.clone(),
            registered_fonts,
        }
    }

    /// Flip open/closed. Opening reseeds the draft from the committed
    /// settings, so the controls always start from what is applied.
    pub fn toggle(&mut self, committed: &ArticleSettings) {
        if !self.is_open {
            self.draft = committed.clone();
        }
        self.is_open = !self.is_open;
    }

    /// Replace one field of the draft with the catalog option at `index`.
    fn edit(&mut self, field: SettingsField, index: usize) {
        let catalog = field.catalog();
        if let Some(option) = catalog.into_iter().nth(index) {
            self.draft.set(field, option);
        }
    }

    /// Reset the draft to defaults; the committed copy follows via the
    /// returned event, so the still-open panel shows defaults at once.
    fn reset(&mut self) -> PanelEvent {
        self.draft = ArticleSettings::default();
        PanelEvent::Reset
    }

    fn apply(&self) -> PanelEvent {
        PanelEvent::Apply(self.draft.clone())
    }

    /// Dismissal decision: while open, Escape or a press outside closes.
    /// While closed nothing is observed at all.
    fn dismissal(open: bool, escape: bool, press: Option<PressTarget>) -> bool {
        open && (escape || press == Some(PressTarget::Outside))
    }

    fn handle_dismissal(&mut self, escape: bool, press: Option<PressTarget>) {
        if Self::dismissal(self.is_open, escape, press) {
            self.is_open = false;
        }
    }

    /// Run the panel for one frame.
    ///
    /// Returns an event when the user applied or reset the settings.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        committed: &ArticleSettings,
    ) -> Option<PanelEvent> {
        // Arrow toggle floats at the right edge, riding the panel's
        // inner edge while it is open.
        let arrow_x = if self.is_open {
            -(PANEL_WIDTH + 16.0)
        } else {
            -16.0
        };
        let arrow = egui::Area::new(egui::Id::new("params_toggle"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(arrow_x, 16.0))
            .show(ctx, |ui| ui.add(ArrowButton::new(self.is_open)))
            .inner;
        if arrow.clicked() {
            self.toggle(committed);
        }

        let mut event = None;
        let mut panel_rect = None;

        if self.is_open {
            let frame = egui::Frame::none()
                .fill(InkColors::PAPER)
                .stroke(Stroke::new(1.0, InkColors::INK))
                .inner_margin(egui::Margin::same(16.0));
            let inner = egui::SidePanel::right("params_panel")
                .resizable(false)
                .exact_width(PANEL_WIDTH)
                .frame(frame)
                .show(ctx, |ui| {
                    event = self.form(ui);
                });
            panel_rect = Some(inner.response.rect);
        }

        // Dismissal gestures are only looked at while the panel is open;
        // nothing here persists across frames, so nothing can leak.
        if self.is_open {
            let escape = ctx.input(|i| i.key_pressed(Key::Escape));
            let press_pos = ctx.input(|i| {
                if i.pointer.any_pressed() {
                    i.pointer.interact_pos()
                } else {
                    None
                }
            });
            let press = press_pos.map(|pos| {
                let in_panel = panel_rect.is_some_and(|r| r.contains(pos));
                if in_panel || arrow.rect.contains(pos) {
                    PressTarget::Inside
                } else {
                    PressTarget::Outside
                }
            });
            self.handle_dismissal(escape, press);
        }

        event
    }

    /// The form itself: one control per settings field, buttons at the
    /// bottom.
    fn form(&mut self, ui: &mut egui::Ui) -> Option<PanelEvent> {
        let mut event = None;

        // Bottom row first so it stays pinned while the controls scroll.
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add(FormButton::new("reset", ButtonVariant::Clear))
                    .clicked()
                {
                    event = Some(self.reset());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(FormButton::new("apply", ButtonVariant::Apply))
                        .clicked()
                    {
                        event = Some(self.apply());
                    }
                });
            });
            ui.add_space(8.0);

            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.label(RichText::new("ARTICLE SETTINGS").size(19.0).strong());
                ui.add_space(12.0);
                self.controls(ui);
            });
        });

        event
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        self.select_control(ui, SettingsField::FontFamily, true);
        ui.add_space(8.0);
        self.radio_control(ui, SettingsField::FontSize);
        ui.add_space(8.0);
        self.select_control(ui, SettingsField::FontColor, false);
        widgets::form_separator(ui);
        self.select_control(ui, SettingsField::BackgroundColor, false);
        ui.add_space(8.0);
        self.select_control(ui, SettingsField::ContentWidth, false);
    }

    fn select_control(&mut self, ui: &mut egui::Ui, field: SettingsField, preview_fonts: bool) {
        let catalog = field.catalog();
        let labels: Vec<String> = catalog.iter().map(|o| o.title.clone()).collect();
        let selected = selected_index(&catalog, self.draft.get(field));

        let picked = if preview_fonts {
            let fonts: Vec<Option<FontFamily>> = catalog
                .iter()
                .map(|o| {
                    o.class
                        .as_ref()
                        .filter(|class| self.registered_fonts.iter().any(|r| r == *class))
                        .map(|class| FontFamily::Name(class.as_str().into()))
                })
                .collect();
            widgets::option_select_with_fonts(
                ui,
                field.title(),
                field.title(),
                &labels,
                &fonts,
                selected,
            )
        } else {
            widgets::option_select(ui, field.title(), field.title(), &labels, selected)
        };

        if let Some(index) = picked {
            self.edit(field, index);
        }
    }

    fn radio_control(&mut self, ui: &mut egui::Ui, field: SettingsField) {
        let catalog = field.catalog();
        let labels: Vec<String> = catalog.iter().map(|o| o.title.clone()).collect();
        let selected = selected_index(&catalog, self.draft.get(field));
        if let Some(index) = widgets::radio_row(ui, field.title(), &labels, selected) {
            self.edit(field, index);
        }
    }
}

fn selected_index(catalog: &[StyleOption], current: &StyleOption) -> usize {
    catalog.iter().position(|o| o == current).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::font_size_options;

    fn panel() -> ParamsPanel {
        ParamsPanel::new(&ArticleSettings::default(), Vec::new())
    }

    #[test]
    fn test_starts_open_with_committed_draft() {
        let committed = ArticleSettings::default();
        let panel = ParamsPanel::new(&committed, Vec::new());
        assert!(panel.is_open);
        assert_eq!(panel.draft, committed);
    }

    #[test]
    fn test_toggle_cycles_and_reseeds_draft() {
        let mut committed = ArticleSettings::default();
        let mut panel = ParamsPanel::new(&committed, Vec::new());

        // Edit the draft, close, change the committed copy elsewhere.
        panel.edit(SettingsField::FontSize, 1);
        panel.toggle(&committed);
        assert!(!panel.is_open);

        committed.set(
            SettingsField::FontSize,
            font_size_options().into_iter().nth(2).unwrap(),
        );

        // Reopening discards the stale draft.
        panel.toggle(&committed);
        assert!(panel.is_open);
        assert_eq!(panel.draft, committed);
    }

    #[test]
    fn test_edit_touches_single_field() {
        let mut panel = panel();
        let before = panel.draft.clone();
        panel.edit(SettingsField::FontColor, 2);

        assert_eq!(
            panel.draft.font_color,
            SettingsField::FontColor.catalog()[2]
        );
        assert_eq!(panel.draft.font_family, before.font_family);
        assert_eq!(panel.draft.font_size, before.font_size);
        assert_eq!(panel.draft.background_color, before.background_color);
        assert_eq!(panel.draft.content_width, before.content_width);
    }

    #[test]
    fn test_edit_out_of_range_is_noop() {
        let mut panel = panel();
        let before = panel.draft.clone();
        panel.edit(SettingsField::FontSize, 99);
        assert_eq!(panel.draft, before);
    }

    #[test]
    fn test_apply_carries_the_draft() {
        let mut panel = panel();
        panel.edit(SettingsField::FontSize, 1);
        let PanelEvent::Apply(applied) = panel.apply() else {
            panic!("expected apply event");
        };
        assert_eq!(applied, panel.draft);
        assert_eq!(applied.font_size.value, "24px");

        // Applying the same draft again carries the identical value.
        assert_eq!(panel.apply(), PanelEvent::Apply(applied));
    }

    #[test]
    fn test_reset_restores_default_draft() {
        let mut panel = panel();
        panel.edit(SettingsField::BackgroundColor, 3);
        assert_ne!(panel.draft, ArticleSettings::default());

        let event = panel.reset();
        assert_eq!(event, PanelEvent::Reset);
        assert_eq!(panel.draft, ArticleSettings::default());
        assert!(panel.is_open, "reset keeps the panel open");
    }

    #[test]
    fn test_escape_closes_only_while_open() {
        let mut panel = panel();
        panel.handle_dismissal(true, None);
        assert!(!panel.is_open);

        // Escape while closed is a no-op.
        panel.handle_dismissal(true, None);
        assert!(!panel.is_open);
    }

    #[test]
    fn test_outside_press_closes_inside_press_does_not() {
        let mut panel = panel();
        panel.handle_dismissal(false, Some(PressTarget::Inside));
        assert!(panel.is_open);

        panel.handle_dismissal(false, None);
        assert!(panel.is_open);

        panel.handle_dismissal(false, Some(PressTarget::Outside));
        assert!(!panel.is_open);

        // Closed panel ignores presses entirely.
        panel.handle_dismissal(false, Some(PressTarget::Outside));
        assert!(!panel.is_open);
    }

    #[test]
    fn test_dismissal_decision_table() {
        use PressTarget::*;
        assert!(!ParamsPanel::dismissal(false, true, Some(Outside)));
        assert!(!ParamsPanel::dismissal(true, false, None));
        assert!(!ParamsPanel::dismissal(true, false, Some(Inside)));
        assert!(ParamsPanel::dismissal(true, true, None));
        assert!(ParamsPanel::dismissal(true, false, Some(Outside)));
    }
}
