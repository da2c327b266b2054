mod app;
mod caret;
mod config;
mod document;
mod edit_buffer;
mod error;
mod keys;
mod markdown;
mod sched;
mod tree;
mod ui;

use std::path::PathBuf;

use config::AppConfig;

fn config_path() -> PathBuf {
    AppConfig::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.toml")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path();

    if !path.exists() {
        if let Err(e) = AppConfig::write_default(&path) {
            eprintln!("Could not write default config to {}: {}", path.display(), e);
        }
    }

    let config = match AppConfig::load_from_path(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", path.display(), e);
            eprintln!("Fix the config file or delete it to regenerate defaults.");
            return Ok(());
        }
    };

    let mut terminal = ratatui::init();

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let result = app::run(&config, &mut terminal).await;

    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}
