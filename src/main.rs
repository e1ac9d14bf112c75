#![windows_subsystem = "windows"]
//! Timetable Landing - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod cards;
mod config;
mod constants;
mod theme;
mod ui;

use app::App;
use config::Config;
use constants::APP_VERSION;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "timetable-landing.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,timetable_landing=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    // Pick up a local .env before resolving configuration
    dotenvy::dotenv().ok();

    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Timetable Landing");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Timetable landing starting");

    let config = Config::from_env();
    info!(
        title = %config.app_title,
        api_base_url = %config.api_base_url,
        "Configuration resolved"
    );

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(980.0, 720.0))
        .with_min_inner_size([480.0, 360.0])
        .with_title(config.app_title.clone());

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Timetable Landing",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::CONTENT_PADDING)),
            )
            .show(ctx, |ui| {
                ui::render_page(ui, &self.config);
            });
    }
}
