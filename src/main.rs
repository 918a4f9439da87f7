mod common;
mod config;
mod fixtures;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use eframe::egui;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "rust_chat_window",
    version,
    about = "Desktop chat window backed by local fixture data"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app_config.window_title.clone())
            .with_inner_size(app_config.window_size)
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    log::info!("Starting {} as {}", app_config.window_title, app_config.local_user.name);

    let title = app_config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ChatApp::new(cc, &app_config)))),
    )
}
