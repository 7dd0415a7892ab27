//! Form widgets for the settings panel — flat, outlined, painter-drawn

use crate::theme::InkColors;
use egui::{FontFamily, Response, RichText, Sense, Stroke, Ui, Widget};

/// Round toggle button with a chevron. Points into the page while the
/// panel is open, toward the panel edge while it is closed.
pub struct ArrowButton {
    is_open: bool,
}

impl ArrowButton {
    pub fn new(is_open: bool) -> Self {
        Self { is_open }
    }
}

impl Widget for ArrowButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let diameter = 31.0;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(diameter, diameter), Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let radius = diameter / 2.0;

            let fill = if response.hovered() {
                InkColors::HOVER
            } else {
                InkColors::PAPER
            };
            painter.circle_filled(center, radius, fill);
            painter.circle_stroke(center, radius, Stroke::new(1.0, InkColors::INK));

            // Chevron: "<" invites opening the right-hand panel, ">" closes it
            let reach = radius * 0.35;
            let tip_x = if self.is_open {
                center.x + reach
            } else {
                center.x - reach
            };
            let tail_x = if self.is_open {
                center.x - reach * 0.4
            } else {
                center.x + reach * 0.4
            };
            let stroke = Stroke::new(1.5, InkColors::INK);
            painter.line_segment(
                [
                    egui::pos2(tail_x, center.y - reach),
                    egui::pos2(tip_x, center.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(tip_x, center.y),
                    egui::pos2(tail_x, center.y + reach),
                ],
                stroke,
            );
        }

        response
    }
}

/// Visual variant of a form button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Outlined, paper background — used for reset
    Clear,
    /// Filled ink background — used for submit
    Apply,
}

/// Form button: flat rectangle, 1px outline, filled when `Apply`.
pub struct FormButton<'a> {
    text: &'a str,
    variant: ButtonVariant,
}

impl<'a> FormButton<'a> {
    pub fn new(text: &'a str, variant: ButtonVariant) -> Self {
        Self { text, variant }
    }
}

impl<'a> Widget for FormButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let text_width = ui.fonts(|f| {
            f.glyph_width(&egui::FontId::proportional(14.0), ' ') * self.text.len() as f32
        });
        let padding = egui::vec2(18.0, 5.0);
        let desired = egui::vec2(
            text_width + padding.x * 2.0,
            ui.spacing().interact_size.y,
        );
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let filled = self.variant == ButtonVariant::Apply
                || response.is_pointer_button_down_on();

            let bg = if filled {
                InkColors::INK
            } else if response.hovered() {
                InkColors::HOVER
            } else {
                InkColors::PAPER
            };
            painter.rect_filled(rect, 0.0, bg);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, InkColors::INK));

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(14.0),
                if filled {
                    InkColors::PAPER
                } else {
                    InkColors::INK
                },
            );
        }

        response
    }
}

/// Titled single-choice dropdown over `labels`.
///
/// Returns the newly selected index when the user picked a different
/// option this frame; the returned index is always within `labels`.
pub fn option_select(
    ui: &mut Ui,
    id_source: &str,
    title: &str,
    labels: &[String],
    selected: usize,
) -> Option<usize> {
    option_select_with_fonts(ui, id_source, title, labels, &[], selected)
}

/// Like [`option_select`], but each entry is previewed in its own font
/// family where one is given (`fonts` may be shorter than `labels`).
pub fn option_select_with_fonts(
    ui: &mut Ui,
    id_source: &str,
    title: &str,
    labels: &[String],
    fonts: &[Option<FontFamily>],
    selected: usize,
) -> Option<usize> {
    if labels.is_empty() {
        return None;
    }
    let selected = selected.min(labels.len() - 1);

    control_title(ui, title);

    let mut picked = None;
    egui::ComboBox::from_id_source(id_source)
        .width(ui.available_width())
        .selected_text(labels[selected].clone())
        .show_ui(ui, |ui| {
            for (i, label) in labels.iter().enumerate() {
                let mut text = RichText::new(label);
                if let Some(Some(family)) = fonts.get(i) {
                    text = text.family(family.clone());
                }
                if ui.selectable_label(i == selected, text).clicked() && i != selected {
                    picked = Some(i);
                }
            }
        });
    picked
}

/// Titled horizontal radio group over `labels`.
///
/// Returns the newly selected index when it changed this frame.
pub fn radio_row(ui: &mut Ui, title: &str, labels: &[String], selected: usize) -> Option<usize> {
    if labels.is_empty() {
        return None;
    }
    let selected = selected.min(labels.len() - 1);

    control_title(ui, title);

    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for (i, label) in labels.iter().enumerate() {
            if ui.radio(i == selected, label).clicked() && i != selected {
                picked = Some(i);
            }
        }
    });
    picked
}

/// 1px horizontal rule with breathing room above and below
pub fn form_separator(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 13.0),
        Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        ui.painter().hline(
            rect.x_range(),
            rect.center().y,
            Stroke::new(1.0, InkColors::INK),
        );
    }
}

fn control_title(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).size(11.0).strong());
}
