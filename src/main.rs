mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod error;
mod events;
mod logging;
mod navigation;
mod ui;

use crate::config::{CardKind, DashboardConfig, get_config_path};
use crate::dashboard::{RouteIntent, assemble, dispatch};
use crate::navigation::StackRouter;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::{Path, PathBuf};
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Dashboard document to load instead of the default location.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Paint a background color behind the dashboard.
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// List every card with the route it navigates to
    Routes {
        /// Dashboard document to load instead of the default location.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Print each row's orientation and cards
    Layout {
        /// Dashboard document to load instead of the default location.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write the bundled dashboard document to disk
    InitConfig {
        /// Where to write the document. Defaults to ~/.home-dashboard/dashboard.json.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(logging::threshold().into());

    let args = Args::parse();
    match args.command {
        Command::Start {
            config,
            with_background,
        } => {
            let config = load_config(config.as_deref())?;
            start(config, with_background).await
        }
        Command::Routes { config } => {
            let config = load_config(config.as_deref())?;
            print_routes(&config);
            Ok(())
        }
        Command::Layout { config } => {
            let config = load_config(config.as_deref())?;
            print_layout(&config);
            Ok(())
        }
        Command::InitConfig { output, force } => {
            let path = match output {
                Some(path) => path,
                None => get_config_path()?,
            };
            init_config(&path, force)
        }
    }
}

/// Load the dashboard document, reporting failures before anything is drawn.
fn load_config(path: Option<&Path>) -> Result<DashboardConfig, Box<dyn Error>> {
    DashboardConfig::load_or_default(path).map_err(|e| {
        cli_messages::print_error("Failed to load dashboard", Some(&e.to_string()));
        e.into()
    })
}

fn print_routes(config: &DashboardConfig) {
    for card in config.cards() {
        if let CardKind::Unknown(raw) = &card.kind {
            println!(
                "{} -> (unknown card type {}, not activatable)",
                card.title, raw
            );
            continue;
        }
        let intent: RouteIntent = dispatch::dispatch(card);
        match StackRouter::resolve(&intent) {
            Ok(_) => println!("{} -> {}", card.title, intent),
            Err(_) => println!("{} -> {} (no screen registered)", card.title, intent),
        }
    }
}

fn print_layout(config: &DashboardConfig) {
    let view = assemble(config);
    for (index, row) in view.body.rows.iter().enumerate() {
        if row.is_empty() {
            println!("Row {} [empty]", index + 1);
            continue;
        }
        let titles: Vec<&str> = row
            .cards
            .iter()
            .map(|card| card.title().unwrap_or("?"))
            .collect();
        println!(
            "Row {} [{}]: {}",
            index + 1,
            row.orientation,
            titles.join(", ")
        );
    }
}

fn init_config(path: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    if path.exists() && !force {
        let details = format!("{} (use --force to overwrite)", path.display());
        cli_messages::print_error("Dashboard document already exists", Some(&details));
        return Err(Box::from(format!(
            "Refusing to overwrite {}",
            path.display()
        )));
    }
    DashboardConfig::default().save(path)?;
    cli_messages::print_success("Dashboard document written", &path.display().to_string());
    Ok(())
}

/// Starts the interactive dashboard.
///
/// # Arguments
/// * `config` - The dashboard document to assemble.
/// * `with_background` - Whether to paint the background color.
async fn start(config: DashboardConfig, with_background: bool) -> Result<(), Box<dyn Error>> {
    cli_messages::print_info(
        "Opening dashboard",
        &format!("{} cards", config.cards().count()),
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(config, ui::UIConfig::new(with_background));
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
