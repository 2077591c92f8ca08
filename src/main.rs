use std::io::{self, stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

mod api;
mod app;
mod cli;
mod clipboard;
mod export;
mod input;
mod logging;
mod models;
mod theme;
mod ui;
mod utils;

#[cfg(test)]
mod test_support;

use api::{ColorApiClient, SchemeSource};
use app::App;
use cli::Config;
use clipboard::SystemClipboard;
use export::format_palette;
use input::map_key;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = cli::parse_args()?;
    logging::init_tracing(&config)?;

    let client = ColorApiClient::new(config.base_url.clone(), config.timeout)
        .context("failed to build HTTP client")?;

    if config.print {
        return print_scheme(&client, &config).await;
    }

    info!(base_url = %client.base_url(), "starting chroma-tui");
    let mut app = App::new(
        config.defaults(),
        Arc::new(client),
        Box::new(SystemClipboard::new()),
    );

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// `--print`: one fetch, written to stdout
async fn print_scheme(client: &ColorApiClient, config: &Config) -> anyhow::Result<()> {
    let scheme = client
        .fetch_scheme(&config.seed, config.mode, config.count)
        .await
        .with_context(|| format!("failed to fetch {} scheme for {}", config.mode, config.seed))?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&scheme)?);
    } else {
        print!("{}", format_palette(&scheme));
    }
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> anyhow::Result<()> {
    app.activate();

    while !app.should_quit {
        app.drain_events();
        app.on_tick(Instant::now());

        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = map_key(app.input_mode, key.code, key.modifiers) {
                    app.apply(action, Instant::now());
                }
            }
        }
    }

    info!("exiting chroma-tui");
    Ok(())
}
