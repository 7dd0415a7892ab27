//! Bundled article content and its rendering
//!
//! The article is a fixed sequence of typed blocks; its appearance is
//! entirely driven by the resolved style the app root derives from the
//! committed settings.

use crate::style::ResolvedStyle;
use egui::{Align, Layout, RichText, Stroke};

/// One block of article content
#[derive(Clone, Debug)]
pub enum ArticleBlock {
    Heading { level: u8, text: String },
    Paragraph(String),
    Quote(String),
}

/// A read-only article
#[derive(Clone, Debug)]
pub struct Article {
    pub blocks: Vec<ArticleBlock>,
}

impl Article {
    /// The bundled sample article.
    pub fn sample() -> Self {
        let heading = |level: u8, text: &str| ArticleBlock::Heading {
            level,
            text: text.to_string(),
        };
        let para = |text: &str| ArticleBlock::Paragraph(text.to_string());

        Self {
            blocks: vec![
                heading(1, "The shape of reading"),
                para(
                    "Long before a reader weighs an argument, the page has already \
                     made one of its own. The measure of a line, the color of the \
                     ink against its ground, the openness of the letterforms: these \
                     decide whether a text feels like an invitation or an obstacle.",
                ),
                heading(2, "Typefaces carry a tone of voice"),
                para(
                    "A geometric sans reads as matter-of-fact; an old-style serif \
                     carries the patience of the printed book. Neither is better. \
                     What matters is that the voice of the type agrees with the \
                     voice of the writing, and that the reader gets to overrule \
                     both when their eyes ask for something else.",
                ),
                ArticleBlock::Quote(
                    "Typography exists to honor content. A well-set page is not \
                     noticed as a page at all; it is read."
                        .to_string(),
                ),
                heading(2, "The reader sets the terms"),
                para(
                    "Print fixed its decisions at the press. A screen does not have \
                     to. Text can be enlarged on a dim evening, recolored against \
                     glare, narrowed when a wall of words feels like work. Every \
                     choice in the side panel here is exactly that: the page \
                     yielding, at last, to the person holding it.",
                ),
                para(
                    "So adjust freely. Pick the face that disappears, the size that \
                     lets you forget you are decoding symbols at all, the column \
                     that your eye can cross without losing its place. The article \
                     will keep saying the same thing; it will simply stop getting \
                     in its own way.",
                ),
            ],
        }
    }
}

/// Render the article under the resolved style.
///
/// The column is centered and capped at the resolved content width;
/// heading sizes scale relative to the body size.
pub fn render(ui: &mut egui::Ui, article: &Article, style: &ResolvedStyle) {
    let width = style.content_width.min(ui.available_width());
    let side = ((ui.available_width() - width) / 2.0).max(0.0);

    ui.horizontal(|ui| {
        ui.add_space(side);
        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            ui.set_width(width);

            for block in &article.blocks {
                match block {
                    ArticleBlock::Heading { level, text } => {
                        let factor = match level {
                            1 => 2.0,
                            2 => 1.5,
                            _ => 1.2,
                        };
                        ui.add_space(style.font_size * 0.6);
                        ui.label(
                            RichText::new(text)
                                .size(style.font_size * factor)
                                .color(style.font_color)
                                .family(style.font_family.clone())
                                .strong(),
                        );
                        ui.add_space(style.font_size * 0.3);
                    }
                    ArticleBlock::Paragraph(text) => {
                        ui.label(
                            RichText::new(text)
                                .size(style.font_size)
                                .color(style.font_color)
                                .family(style.font_family.clone()),
                        );
                        ui.add_space(style.font_size * 0.5);
                    }
                    ArticleBlock::Quote(text) => {
                        quote_block(ui, text, style);
                        ui.add_space(style.font_size * 0.5);
                    }
                }
            }
        });
    });
}

/// Quote: indented, italic, with a rule along the left edge.
fn quote_block(ui: &mut egui::Ui, text: &str, style: &ResolvedStyle) {
    let row = ui.horizontal(|ui| {
        ui.add_space(16.0);
        // Labels in horizontal layouts do not wrap unless told to
        ui.add(
            egui::Label::new(
                RichText::new(text)
                    .size(style.font_size)
                    .color(style.font_color)
                    .family(style.font_family.clone())
                    .italics(),
            )
            .wrap(true),
        );
    });
    let rect = row.response.rect;
    ui.painter().vline(
        rect.left() + 1.0,
        rect.y_range(),
        Stroke::new(2.0, style.font_color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_article_shape() {
        let article = Article::sample();
        assert!(!article.blocks.is_empty());
        assert!(matches!(
            article.blocks[0],
            ArticleBlock::Heading { level: 1, .. }
        ));
        assert!(article
            .blocks
            .iter()
            .any(|b| matches!(b, ArticleBlock::Quote(_))));
    }
}
