//! Pythagore desktop entry point.

use desktop::app::App;
use desktop::ui::theme;

/// Default backend base URL when `PYTHAGORE_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[tokio::main]
async fn main() -> eframe::Result<()> {
    desktop::logging::init();

    // The base URL is resolved once here and injected into the client;
    // nothing else reads the environment at runtime.
    let api_url =
        std::env::var("PYTHAGORE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    tracing::info!(api_url = %api_url, "Starting Pythagore desktop client");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pythagore Math Tutor")
            .with_inner_size([760.0, 900.0])
            .with_min_inner_size([480.0, 540.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Pythagore Math Tutor",
        native_options,
        Box::new(move |cc| {
            let app = App::new(api_url);
            theme::apply(&cc.egui_ctx, &app.state.read().settings.theme_config);
            Ok(Box::new(app))
        }),
    )
}
