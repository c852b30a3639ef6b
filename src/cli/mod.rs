//! Command-line interface for uocplay.
//!
//! Every command loads the record files fresh, runs one query and prints
//! the result. Nothing is written back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, IngestSettings, ResolvedConfig};
use crate::ingest::{load_films, load_shows, LoadReport};
use crate::library::{ShowCatalog, WatchStack};

/// uocplay - Show catalog and film watch history
#[derive(Parser, Debug)]
#[command(name = "uocplay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Abort on the first malformed record instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every show with its seasons and episodes
    Shows {
        /// Show records file (defaults to the configured one)
        #[arg(short, long, env = "UOCPLAY_SHOWS")]
        file: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single show
    Show {
        /// Show name (exact match)
        name: String,

        #[arg(short, long, env = "UOCPLAY_SHOWS")]
        file: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Total duration and average rating of a season
    Season {
        /// Show name (exact match)
        show: String,

        /// Season number
        number: i32,

        #[arg(short, long, env = "UOCPLAY_SHOWS")]
        file: Option<PathBuf>,
    },

    /// Number of shows in the catalog
    Count {
        #[arg(short, long, env = "UOCPLAY_SHOWS")]
        file: Option<PathBuf>,
    },

    /// Print the film watch stack, most recent first
    Films {
        /// Film records file (defaults to the configured one)
        #[arg(short, long, env = "UOCPLAY_FILMS")]
        file: Option<PathBuf>,

        /// Pop this many films before printing
        #[arg(short, long, default_value = "0")]
        pop: usize,

        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let strict = self.strict;

        match self.command {
            Commands::Shows { file, json } => {
                let catalog = open_catalog(file, strict).await?;
                print_catalog(&catalog, json)
            }
            Commands::Show { name, file, json } => {
                let catalog = open_catalog(file, strict).await?;
                print_show(&catalog, &name, json)
            }
            Commands::Season { show, number, file } => {
                let catalog = open_catalog(file, strict).await?;
                print_season_stats(&catalog, &show, number)
            }
            Commands::Count { file } => {
                let catalog = open_catalog(file, strict).await?;
                println!("{}", catalog.len());
                Ok(())
            }
            Commands::Films { file, pop, json } => {
                let stack = open_stack(file, strict).await?;
                print_films(stack, pop, json)
            }
            Commands::Config => show_config(config::config()?),
        }
    }
}

/// Records file and ingest settings for a command.
///
/// The full configuration (and with it the home directory) is only resolved
/// when no file was given.
fn source(
    file: Option<PathBuf>,
    configured: fn(&ResolvedConfig) -> &PathBuf,
    strict: bool,
) -> Result<(PathBuf, IngestSettings)> {
    let (path, mut settings) = match file {
        Some(path) => (path, config::ingest_settings()?),
        None => {
            let config = config::config()?;
            (configured(config).clone(), config.ingest.clone())
        }
    };
    settings.strict |= strict;
    Ok((path, settings))
}

fn report_skipped(report: &LoadReport, path: &Path) {
    if report.skipped > 0 {
        eprintln!(
            "[{} of {} records skipped in {}]",
            report.skipped,
            report.total(),
            path.display()
        );
    }
}

/// Load the catalog from `file` or the configured shows file
async fn open_catalog(file: Option<PathBuf>, strict: bool) -> Result<ShowCatalog> {
    let (path, settings) = source(file, |c| &c.shows_file, strict)?;

    let (catalog, report) = load_shows(&path, &settings).await?;
    report_skipped(&report, &path);
    Ok(catalog)
}

/// Load the watch stack from `file` or the configured films file
async fn open_stack(file: Option<PathBuf>, strict: bool) -> Result<WatchStack> {
    let (path, settings) = source(file, |c| &c.films_file, strict)?;

    let (stack, report) = load_films(&path, &settings).await?;
    report_skipped(&report, &path);
    Ok(stack)
}

fn print_catalog(catalog: &ShowCatalog, json: bool) -> Result<()> {
    if json {
        let shows: Vec<_> = catalog.shows().collect();
        println!("{}", serde_json::to_string_pretty(&shows)?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    print!("{}", catalog);
    println!("\nTotal: {} shows", catalog.len());
    Ok(())
}

fn print_show(catalog: &ShowCatalog, name: &str, json: bool) -> Result<()> {
    let show = catalog
        .find(name)
        .with_context(|| format!("Show not found: {}", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(show)?);
    } else {
        print!("{}", show);
    }
    Ok(())
}

fn print_season_stats(catalog: &ShowCatalog, show: &str, number: i32) -> Result<()> {
    let duration = catalog.season_total_duration(show, number)?;
    let rating = catalog.season_average_rating(show, number);

    println!("Show: {}", show);
    println!("Season: {}", number);
    println!("Total duration: {}", duration);
    println!("Average rating: {:.1}", rating);
    Ok(())
}

fn print_films(mut stack: WatchStack, pop: usize, json: bool) -> Result<()> {
    for _ in 0..pop {
        let film = stack.pop()?;
        eprintln!("[Popped: {}]", film.name);
    }

    if json {
        let films: Vec<_> = stack.films().collect();
        println!("{}", serde_json::to_string_pretty(&films)?);
        return Ok(());
    }

    if stack.is_empty() {
        println!("Watch stack is empty.");
        return Ok(());
    }

    for (i, film) in stack.films().enumerate() {
        println!("{:>3}. {}", i + 1, film);
    }
    Ok(())
}

/// Print the resolved configuration
fn show_config(config: &ResolvedConfig) -> Result<()> {
    println!("Home:        {}", config.home.display());
    println!("Shows file:  {}", config.shows_file.display());
    println!("Films file:  {}", config.films_file.display());
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }
    println!("Delimiter:   {:?}", config.ingest.delimiter);
    println!("Skip header: {}", config.ingest.skip_header);
    println!("Strict:      {}", config.ingest.strict);
    Ok(())
}
