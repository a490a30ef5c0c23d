//! Roomy terminal binary.
//!
//! Book shared rooms from the terminal. All state lives in memory and is
//! gone when the program exits.

use std::{
    error::Error,
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::Parser;
use roomy_app::{App, Runtime};
use roomy_core::BookingConfig;
use roomy_tui::TerminalDriver;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Book shared rooms from the terminal.
#[derive(Debug, Parser)]
#[command(name = "roomy", version, about)]
struct Args {
    /// Room offered for booking. Repeat to replace the default room set.
    #[arg(long = "room", value_name = "NAME")]
    rooms: Vec<String>,

    /// Write logs to this file. `RUST_LOG` sets the level (default: info).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = if args.rooms.is_empty() {
        BookingConfig::default()
    } else {
        BookingConfig::with_rooms(&args.rooms)?
    };
    info!(rooms = config.rooms().len(), "starting roomy");

    let driver = TerminalDriver::new()?;
    let mut runtime = Runtime::new(driver, App::new(&config));
    runtime.run()?;

    info!(reservations = runtime.app().store().len(), "exiting");
    Ok(())
}

/// Log to a file only; stdout belongs to the TUI.
fn init_logging(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
