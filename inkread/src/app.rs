//! Application root — owns the committed settings and the page layout

use crate::article::{self, Article};
use crate::panel::{PanelEvent, ParamsPanel};
use crate::params::{font_family_options, ArticleSettings};
use crate::style::ResolvedStyle;
use egui::Context;
use inkcore::ReaderTheme;

pub struct ReaderApp {
    /// The committed settings — the single source of truth the article
    /// is styled from. Replaced wholesale on apply/reset.
    settings: ArticleSettings,
    panel: ParamsPanel,
    article: Article,
    /// Font-family keys the theme actually loaded
    registered_fonts: Vec<String>,
}

impl ReaderApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register the catalog fonts. Families without a font file on
        // disk fall back to the default proportional face.
        let font_files: Vec<(String, String)> = font_family_options()
            .into_iter()
            .filter_map(|option| {
                let class = option.class?;
                let file = format!("{}-Regular.ttf", option.title.replace(' ', ""));
                Some((class, file))
            })
            .collect();
        let registered_fonts = ReaderTheme::default().apply(&cc.egui_ctx, &font_files);

        let settings = ArticleSettings::default();
        Self {
            panel: ParamsPanel::new(&settings, registered_fonts.clone()),
            settings,
            article: Article::sample(),
            registered_fonts,
        }
    }
}

impl eframe::App for ReaderApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Panel first: an apply/reset this frame restyles the article in
        // the same frame.
        match self.panel.show(ctx, &self.settings) {
            Some(PanelEvent::Apply(new_settings)) => self.settings = new_settings,
            Some(PanelEvent::Reset) => self.settings = ArticleSettings::default(),
            None => {}
        }

        let resolved = ResolvedStyle::from_settings(&self.settings, &self.registered_fonts);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(resolved.background)
                    .inner_margin(egui::Margin::symmetric(24.0, 24.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    article::render(ui, &self.article, &resolved);
                });
            });
    }
}
