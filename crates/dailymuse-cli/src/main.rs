//! Daily Muse CLI
//!
//! Thin wrapper around the dailymuse-core curator for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Classify a headline
//! dailymuse mood "Tensions rise in the border regions"
//!
//! # Curate today's edition from the master library
//! dailymuse curate --library master_library.json --output edition.json
//!
//! # ...and refresh the page meta tags, RSS feed and social post
//! dailymuse curate -l master_library.json -o edition.json \
//!     --html index.html --rss feed.xml --social daily_share.txt
//!
//! # Re-curate every 30 seconds until Ctrl+C
//! dailymuse schedule --library master_library.json --output edition.json --interval 30
//!
//! # Print an edition
//! dailymuse show --edition edition.json
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dailymuse_core::curator::{
    curate, publish, Curation, Library, PublishTargets, DEFAULT_SITE_URL,
};
use dailymuse_core::{load_edition, previous_ids, save_edition, Category};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Daily Muse - daily art curation
#[derive(Parser)]
#[command(name = "dailymuse")]
#[command(version = "0.1.0")]
#[command(about = "Daily Muse - daily art curation")]
#[command(
    long_about = "Reads the day's mood from a headline and curates movies, music and books for the daily recommendations page."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the mood of a headline
    Mood {
        /// Headline text
        headline: String,
    },

    /// Curate one edition
    Curate {
        #[command(flatten)]
        run: CurateArgs,
    },

    /// Curate repeatedly on a fixed interval
    Schedule {
        #[command(flatten)]
        run: CurateArgs,

        /// Seconds between cycles
        #[arg(long, default_value_t = 30)]
        interval: u64,

        /// Stop after this many cycles (default: run until Ctrl+C)
        #[arg(long)]
        iterations: Option<u64>,
    },

    /// Print an edition file
    Show {
        /// Edition JSON file
        #[arg(short, long)]
        edition: PathBuf,
    },
}

#[derive(clap::Args, Clone)]
struct CurateArgs {
    /// Master library JSON file
    #[arg(short, long)]
    library: PathBuf,

    /// Edition JSON file to write (also read to avoid repeats)
    #[arg(short, long)]
    output: PathBuf,

    /// Headline to read the mood from (default: a simulated headline)
    #[arg(long)]
    headline: Option<String>,

    /// Seed for reproducible selection
    #[arg(long)]
    seed: Option<u64>,

    /// Page whose Open Graph and Twitter meta tags are refreshed
    #[arg(long)]
    html: Option<PathBuf>,

    /// RSS feed to put the day's entry in (created if missing)
    #[arg(long)]
    rss: Option<PathBuf>,

    /// Text file to write the day's social post to
    #[arg(long)]
    social: Option<PathBuf>,

    /// Public URL of the page, used for feed links and preview images
    #[arg(long, default_value = DEFAULT_SITE_URL)]
    site_url: String,
}

impl CurateArgs {
    fn publish_targets(&self) -> PublishTargets {
        PublishTargets {
            html: self.html.clone(),
            rss: self.rss.clone(),
            social: self.social.clone(),
            site_url: self.site_url.clone(),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Curate once and write the edition, returning what was chosen.
fn run_curation(args: &CurateArgs, rng: &mut StdRng) -> Result<Curation> {
    let library = Library::load(&args.library)
        .with_context(|| format!("Failed to read library {}", args.library.display()))?;
    let excluded = previous_ids(&args.output)
        .with_context(|| format!("Failed to read previous edition {}", args.output.display()))?;

    let curation = curate(&library, args.headline.as_deref(), &excluded, rng);

    println!("Headline: {}", curation.headline);
    println!("Mood: {}", curation.mood);
    println!("Avoiding {} recently shown items.", excluded.len());

    save_edition(&args.output, &curation.edition)
        .with_context(|| format!("Failed to write edition {}", args.output.display()))?;
    println!("Edition written to {}", args.output.display());
    for category in Category::ALL {
        println!(
            "  {}: {} items",
            category.label(),
            curation.edition.items(category).len()
        );
    }

    announce(&curation, &args.publish_targets());
    Ok(curation)
}

/// Write the configured marketing outputs. Failures are reported but never
/// fail the curation.
fn announce(curation: &Curation, targets: &PublishTargets) {
    for outcome in publish(curation, targets, chrono::Utc::now()) {
        match outcome.result {
            Ok(()) => println!("{} updated: {}", outcome.channel, outcome.path.display()),
            Err(e) => println!(
                "{} failed (non-critical): {}: {}",
                outcome.channel,
                outcome.path.display(),
                e
            ),
        }
    }
}

async fn run_schedule(args: CurateArgs, interval: u64, iterations: Option<u64>) -> Result<()> {
    let mut rng = make_rng(args.seed);
    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
    let mut cycle: u64 = 1;

    println!("Curating every {} seconds. Press Ctrl+C to stop.", interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                println!("Scheduler stopped.");
                break;
            }
        }

        println!("[{}] Cycle #{}", chrono::Local::now().format("%H:%M:%S"), cycle);
        if let Err(e) = run_curation(&args, &mut rng) {
            tracing::error!("Curation cycle {} failed: {:#}", cycle, e);
            println!("  ERROR: {:#}", e);
        }

        if iterations.is_some_and(|n| cycle >= n) {
            break;
        }
        cycle += 1;
    }

    Ok(())
}

fn show_edition(path: &Path) -> Result<()> {
    let edition = load_edition(path)
        .with_context(|| format!("Failed to read edition {}", path.display()))?;

    for category in Category::ALL {
        println!("{}:", category.label());
        let items = edition.items(category);
        if items.is_empty() {
            println!("  (none)");
        }
        for item in items {
            println!(
                "  [{}] {}: {}",
                item.layout.class_name(),
                item.title,
                item.subtitle
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Mood { headline } => {
            let mood = dailymuse_core::curator::analyze_mood(&headline);
            println!("Mood: {}", mood);
            println!("Tags: {}", mood.tags().join(", "));
        }
        Commands::Curate { run } => {
            let mut rng = make_rng(run.seed);
            run_curation(&run, &mut rng)?;
        }
        Commands::Schedule {
            run,
            interval,
            iterations,
        } => {
            run_schedule(run, interval, iterations).await?;
        }
        Commands::Show { edition } => {
            show_edition(&edition)?;
        }
    }

    Ok(())
}
