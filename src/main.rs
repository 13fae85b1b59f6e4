use color_eyre::{eyre::eyre, Result};
use eframe::egui::{self, Pos2};
use tokio::sync::watch;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use touchstick::config::StickConfig;
use touchstick::input::{GamepadReader, Polling, DEFAULT_DEADZONE};
use touchstick::stick::VirtualStick;
use touchstick::ui::StickDemoApp;

#[tokio::main]
async fn main() -> Result<()> {
    setup()?;

    let config_path = StickConfig::default_path();
    info!("Loading stick config from {:?}", config_path);
    let config = StickConfig::load(&config_path).await?;

    // The UI reads the handle position from here every frame
    let (handle_tx, handle_rx) = watch::channel(Pos2::ZERO);
    let stick = VirtualStick::new(&config, Box::new(handle_tx))?;

    let gamepad = setup_gamepad();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Touchstick",
        native_options,
        Box::new(|cc| Ok(Box::new(StickDemoApp::new(cc, stick, handle_rx, gamepad)))),
    )
    .map_err(|e| eyre!("Failed to run UI: {}", e))?;

    Ok(())
}

fn setup_gamepad() -> Option<GamepadReader<Polling>> {
    match GamepadReader::create(DEFAULT_DEADZONE) {
        Ok(reader) => Some(reader.initialize()),
        Err(e) => {
            warn!("Continuing without gamepad input: {}", e);
            None
        }
    }
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    let level = match std::env::var("RUST_LOG").as_deref() {
        Ok("debug") | Ok("trace") => Level::DEBUG,
        _ => Level::INFO,
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
