use std::io::{Write, stdout};

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use kiosk::domain::Catalog;
use kiosk::infrastructure::{AppConfig, CliArgs, ConfigNotice, StorageManager};
use kiosk::presentation::App;
use kiosk::presentation::theme::Theme;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, Option<ConfigNotice>)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let (mut config, notice) = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, notice))
}

fn create_app(config: &AppConfig) -> App {
    let theme = Theme::new(&config.theme.accent_color);
    App::new(Catalog::builtin(), config.kiosk_settings(), theme)
}

/// Runs `app` with mouse capture enabled around it when `enabled` is set.
///
/// Capture is disabled again even when `app` fails; the first error wins.
async fn with_mouse_capture<W, F>(out: &mut W, enabled: bool, app: F) -> Result<()>
where
    W: Write,
    F: Future<Output = Result<()>>,
{
    if !enabled {
        return app.await;
    }

    execute!(out, EnableMouseCapture)?;
    let result = app.await;
    let disabled = execute!(out, DisableMouseCapture);
    result.and(disabled.map_err(Into::into))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, notice) = load_config()?;
    init_logging(&config)?;
    if let Some(notice) = notice {
        notice.log();
    }

    info!(version = kiosk::VERSION, "Starting {}", kiosk::NAME);

    let app = create_app(&config);

    let mut terminal = ratatui::init();

    let result = with_mouse_capture(&mut stdout(), config.mouse, app.run(&mut terminal)).await;

    ratatui::restore();

    result
}
