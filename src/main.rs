//! specview - Main Entry Point
//!
//! Launches `ubertooth-specan` in streaming mode and visualizes its sweeps
//! as a live, recency-faded line chart.

use specview::{AppConfig, ShutdownHandle, SpectrumApp, StreamWorker, SweepHistory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const WINDOW_TITLE: &str = "Spectrum Analysis";

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,specview=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting specview");

    let config = AppConfig::load_or_default();
    let history = SweepHistory::new(config.history_depth);
    let shutdown = ShutdownHandle::new();

    // OS interrupt/termination requests go through the same shutdown token
    // as closing the window: stop the scanner, drain, exit 0.
    let signal_shutdown = shutdown.clone();
    if let Err(e) = ctrlc::set_handler(move || signal_shutdown.request()) {
        tracing::warn!("Failed to install signal handler: {}", e);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| {
            // The worker is spawned here so it can signal repaints through
            // the real egui context.
            let worker = StreamWorker::new(
                config.source.clone(),
                history.clone(),
                shutdown.clone(),
                cc.egui_ctx.clone(),
            );
            let handle = std::thread::spawn(move || worker.run());

            Ok(Box::new(SpectrumApp::new(history, shutdown, handle)))
        }),
    )
}
