//! App module - application state for the landing screen

use crate::config::Config;
use crate::theme;
use eframe::egui;

/// The landing screen has a single state: the configuration resolved at
/// startup. Nothing mutates after construction.
pub struct App {
    pub(crate) config: Config,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font for the card headings
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::ui;

    fn demo_config() -> Config {
        Config {
            app_title: "Demo".to_string(),
            api_base_url: "http://localhost:8000".to_string(),
        }
    }

    // Headless render: the page must build without panicking, and a second
    // pass from the same immutable inputs must also succeed (no internal
    // state exists to change between frames).
    #[test]
    fn page_renders_headless_twice() {
        let config = demo_config();
        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::render_page(ui, &config);
                });
            });
        }
    }
}
