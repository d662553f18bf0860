//! CLI frontend for the Dicetray roller.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dicetray",
    about = "Dicetray — a tabletop dice roller with history and skins",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding persisted state
    #[arg(long, global = true, default_value = ".dicetray")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the tray (or an explicit list of dice)
    Roll {
        /// Dice to roll instead of the saved tray, e.g. d20 d6 d6
        dice: Vec<String>,

        /// Label for the roll, e.g. "Stealth Check"
        #[arg(short, long)]
        label: Option<String>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Do not overwrite the saved tray with this roll's dice
        #[arg(short, long)]
        keep_pool: bool,
    },

    /// Manage the saved dice tray
    Pool {
        #[command(subcommand)]
        action: PoolAction,
    },

    /// Show recorded rolls
    History {
        /// Only rolls that included this die type, e.g. d20
        #[arg(short, long)]
        die: Option<String>,

        /// Show only the most recent N rolls
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Clear the roll history and stats
    Reset,

    /// Show session statistics and the roll-total chart
    Stats {
        /// Comma-separated bucket boundaries, e.g. 5,10,15,19
        #[arg(short, long)]
        buckets: Option<String>,
    },

    /// List dice skins in the current profile (or the starter collection)
    Skins {
        /// Filter by rarity: common, rare, epic, legendary
        #[arg(short, long)]
        rarity: Option<String>,
    },

    /// Equip a skin by name on the current profile
    Equip {
        /// Skin name (case-insensitive)
        name: String,
    },

    /// Manage dice profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// View or change app settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum PoolAction {
    /// Show the dice currently in the tray
    Show,
    /// Add a die, e.g. d8
    Add {
        /// Die to add
        die: String,
    },
    /// Remove the die at a 1-based position
    Remove {
        /// Position from `pool show`
        position: usize,
    },
    /// Remove all dice
    Clear,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List profiles; the selected one is marked with *
    List,
    /// Create a profile with the starter skin collection and select it
    Create {
        /// Profile name
        name: String,

        /// Accent color hex string
        #[arg(short, long, default_value = "#13ec80")]
        color: String,
    },
    /// Select a profile by name
    Select {
        /// Profile name (case-insensitive)
        name: String,
    },
    /// Delete a profile by name
    Delete {
        /// Profile name (case-insensitive)
        name: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show all settings
    Show,
    /// Change one setting, e.g. `settings set shake_to_roll on`
    Set {
        /// Setting name: sound, haptics, shake_to_roll, gravity, bounce
        key: String,
        /// New value (on/off for toggles, 0-100 for sliders)
        value: String,
    },
    /// Restore all settings to defaults
    Reset,
}

fn main() {
    let cli = Cli::parse();

    let result = commands::open_store(&cli.data_dir).and_then(|store| match cli.command {
        Commands::Roll {
            dice,
            label,
            seed,
            keep_pool,
        } => commands::roll::run(&store, &dice, label.as_deref(), seed, keep_pool),
        Commands::Pool { action } => match action {
            PoolAction::Show => commands::pool::show(&store),
            PoolAction::Add { die } => commands::pool::add(&store, &die),
            PoolAction::Remove { position } => commands::pool::remove(&store, position),
            PoolAction::Clear => commands::pool::clear(&store),
        },
        Commands::History { die, limit } => {
            commands::history::show(&store, die.as_deref(), limit)
        }
        Commands::Reset => commands::history::reset(&store),
        Commands::Stats { buckets } => commands::stats::run(&store, buckets.as_deref()),
        Commands::Skins { rarity } => commands::skins::run(&store, rarity.as_deref()),
        Commands::Equip { name } => commands::equip::run(&store, &name),
        Commands::Profile { action } => match action {
            ProfileAction::List => commands::profile::list(&store),
            ProfileAction::Create { name, color } => {
                commands::profile::create(&store, &name, &color)
            }
            ProfileAction::Select { name } => commands::profile::select(&store, &name),
            ProfileAction::Delete { name } => commands::profile::delete(&store, &name),
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&store),
            SettingsAction::Set { key, value } => commands::settings::set(&store, &key, &value),
            SettingsAction::Reset => commands::settings::reset(&store),
        },
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
