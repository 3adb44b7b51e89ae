//! CLI frontend for the Arcana reading engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana — tarot readings from the command line",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw cards and generate a reading for a question
    Read {
        /// The question to read on
        question: String,

        /// Layout id (see `arcana layouts`); recommended from the question
        /// when omitted
        #[arg(short, long)]
        layout: Option<String>,

        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Do not save the reading (also skips per-card interpretation)
        #[arg(long)]
        no_save: bool,

        /// Card name to keep out of the draw (repeatable)
        #[arg(short = 'x', long = "exclude")]
        exclude: Vec<String>,

        /// Path of the reading log
        #[arg(short, long, default_value = "readings.json")]
        store: PathBuf,
    },

    /// List saved readings, newest first
    History {
        /// Show at most this many readings
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Filter by question category (love, career, health, decision, general)
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by layout id
        #[arg(long)]
        layout: Option<String>,

        /// Path of the reading log
        #[arg(short, long, default_value = "readings.json")]
        store: PathBuf,
    },

    /// Show aggregate statistics over saved readings
    Stats {
        /// Path of the reading log
        #[arg(short, long, default_value = "readings.json")]
        store: PathBuf,
    },

    /// List available layouts
    Layouts {
        /// Filter by difficulty (beginner, intermediate, advanced)
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// List the card catalogue
    Cards {
        /// Filter by suit (major, wands, cups, swords, pentacles)
        #[arg(long)]
        suit: Option<String>,

        /// Filter by keyword substring
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Read {
            question,
            layout,
            seed,
            no_save,
            exclude,
            store,
        } => commands::read::run(&question, layout.as_deref(), seed, no_save, exclude, &store),
        Commands::History {
            limit,
            category,
            layout,
            store,
        } => commands::history::run(&store, limit, category.as_deref(), layout.as_deref()),
        Commands::Stats { store } => commands::stats::run(&store),
        Commands::Layouts { difficulty } => commands::layouts::run(difficulty.as_deref()),
        Commands::Cards { suit, search } => {
            commands::cards::run(suit.as_deref(), search.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
