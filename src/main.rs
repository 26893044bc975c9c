//! Eta - download time estimator for the terminal

mod app;
mod config;
mod error;
mod estimate;
mod form;
mod input;
mod theme;
mod ui;
mod units;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;

use app::App;
use config::Config;
use estimate::Estimate;
use form::{sanitize::sanitize, update::Measurement, Snapshot, UpdateHandler};

#[derive(Parser, Debug)]
#[command(name = "eta", about = "How long will this download take?", version)]
struct Args {
    /// Use alternate config file
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<std::path::PathBuf>,

    /// Override the configured theme
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a single estimate and exit
    Estimate {
        /// Download size, e.g. 10
        size: String,
        /// Size unit: B, KB, MB, GB, TB
        size_unit: String,
        /// Connection speed, e.g. 100
        speed: String,
        /// Speed unit: bs, Kbs, Mbs, Gbs, Bs, KBs, MBs, GBs
        speed_unit: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// `estimate --json` output
#[derive(Debug, Serialize)]
struct EstimateReport {
    #[serde(flatten)]
    estimate: Estimate,
    bytes: f64,
    bits_per_second: f64,
}

fn main() -> Result<()> {
    // Logging to stderr when RUST_LOG is set
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = Config::load_from(args.config.clone().or_else(Config::default_path));

    match args.command {
        Some(Command::Estimate {
            size,
            size_unit,
            speed,
            speed_unit,
            json,
        }) => {
            let snapshot = Snapshot {
                size_value: sanitize(&size),
                size_unit,
                speed_value: sanitize(&speed),
                speed_unit,
            };
            println!("{}", render_estimate(&config, &snapshot, json)?);
            Ok(())
        }
        Some(Command::Config) => {
            let text = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{}", text);
            Ok(())
        }
        None => run_interactive(&config, args.theme.as_deref()),
    }
}

/// One-shot estimate as two lines of text or a JSON object
fn render_estimate(config: &Config, snapshot: &Snapshot, json: bool) -> Result<String> {
    let handler = UpdateHandler::new(config.format.formatter());
    let estimate = handler.compute(snapshot);

    if !json {
        return Ok(format!("{}\n{}", estimate.time, estimate.date));
    }

    let measurement = Measurement::from_snapshot(snapshot);
    let report = EstimateReport {
        estimate,
        bytes: measurement.bytes,
        bits_per_second: measurement.bits_per_second,
    };
    serde_json::to_string(&report).context("Failed to serialize estimate")
}

fn run_interactive(config: &Config, theme: Option<&str>) -> Result<()> {
    let mut app = App::new()
        .with_theme_name(theme.unwrap_or(&config.preferences.theme))
        .with_key_preset_name(&config.preferences.key_preset)
        .with_units(config.units.size_unit(), config.units.speed_unit())
        .with_formatter(config.format.formatter());
    app.on_ready().context("Failed to bind estimator to form")?;

    // Terminal setup
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll events (100ms timeout keeps the header clock moving)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                app.handle_key(key);

                if app.should_quit {
                    return Ok(());
                }
            }
        }
    }
}
