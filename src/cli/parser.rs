use crate::export::{ExportFormat, ExportKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for LogCalc
#[derive(Parser)]
#[command(
    name = "logcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Winder production calculator: speed/output conversion, hourly tracking with catch-up speeds, shifts and logbook",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage materials and their conversion constants
    Material {
        #[command(subcommand)]
        action: MaterialAction,
    },

    /// Convert between machine speed and output rate
    Calc {
        #[command(subcommand)]
        action: CalcAction,
    },

    /// Hourly target tracking with catch-up speeds for the remaining hours
    Track {
        /// Material id (defaults to config `default_material`, then the first material)
        #[arg(long = "material", short = 'm')]
        material: Option<String>,

        /// Number of hours in the period
        #[arg(long = "hours")]
        hours: Option<usize>,

        /// Target for every hour
        #[arg(long = "target")]
        target: Option<f64>,

        /// Per-hour targets, comma separated; blanks keep the default target
        #[arg(long = "targets", value_name = "LIST")]
        targets: Option<String>,

        /// Measured output per hour, comma separated; blanks are not yet measured
        #[arg(long = "actuals", value_name = "LIST")]
        actuals: Option<String>,
    },

    /// Recorded calculation results
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Shift planning and progress
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Operator logbook
    Logbook {
        #[command(subcommand)]
        action: LogbookAction,
    },

    /// Export shifts (json) or run history (csv, json)
    Export {
        #[arg(long, value_enum, default_value = "shifts")]
        kind: ExportKind,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (absolute path required, ~ is expanded)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum MaterialAction {
    /// List materials
    List,
    /// Add a material
    Add {
        #[arg(long)]
        diameter: f64,
        #[arg(long)]
        constant: f64,
    },
    /// Update a material
    Update {
        id: String,
        #[arg(long)]
        diameter: Option<f64>,
        #[arg(long)]
        constant: Option<f64>,
    },
    /// Delete a material (records referencing it are kept)
    Del { id: String },
    /// Replace all materials with the default set
    Reset,
}

#[derive(Subcommand)]
pub enum CalcAction {
    /// Output per minute produced at a given speed
    Rate {
        #[arg(long, short = 'm')]
        material: Option<String>,
        #[arg(long)]
        speed: f64,
        /// Also record the result in the run history
        #[arg(long)]
        record: bool,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Speed needed for a target output per minute
    Speed {
        #[arg(long, short = 'm')]
        material: Option<String>,
        #[arg(long)]
        rate: f64,
        /// Also record the result in the run history
        #[arg(long)]
        record: bool,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Linear hourly forecast at a given speed
    Forecast {
        #[arg(long, short = 'm')]
        material: Option<String>,
        #[arg(long)]
        speed: f64,
        #[arg(long)]
        hours: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Show the most recent runs
    List {
        #[arg(long)]
        limit: Option<usize>,
        /// Show the average per hour of day instead of the runs
        #[arg(long)]
        profile: bool,
    },
    /// Record a run
    Add {
        #[arg(long, short = 'm')]
        material: Option<String>,
        #[arg(long)]
        speed: f64,
        #[arg(long)]
        target: f64,
        #[arg(long)]
        actual: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Record the measured output of a run or change its notes
    Update {
        id: String,
        #[arg(long)]
        actual: Option<f64>,
        #[arg(long, conflicts_with = "actual")]
        clear_actual: bool,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a run
    Del { id: String },
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// List shifts by category
    List {
        #[arg(long, conflicts_with_all = ["upcoming", "history"])]
        current: bool,
        #[arg(long, conflicts_with = "history")]
        upcoming: bool,
        #[arg(long)]
        history: bool,
        /// Show per-material totals for each shift
        #[arg(long)]
        details: bool,
    },
    /// Plan a shift
    Add {
        /// Start (YYYY-MM-DDTHH:MM or RFC 3339)
        #[arg(long)]
        start: String,
        /// End (YYYY-MM-DDTHH:MM or RFC 3339)
        #[arg(long)]
        end: String,
        #[arg(long)]
        target: f64,
        #[arg(long, short = 'm')]
        material: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update a shift
    Update {
        id: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        target: Option<f64>,
        #[arg(long, short = 'm')]
        material: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a shift and its entries
    Del { id: String },
    /// Record production inside a shift
    Entry {
        shift_id: String,
        #[arg(long, short = 'm')]
        material: Option<String>,
        #[arg(long)]
        speed: f64,
        /// Run time in minutes
        #[arg(long)]
        duration: u32,
        #[arg(long)]
        actual: f64,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum LogbookAction {
    /// List entries, optionally filtered
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Only entries carrying every given tag
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Add an entry
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "observation")]
        category: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long, short = 'm')]
        material: Option<String>,
        #[arg(long)]
        speed: Option<f64>,
    },
    /// Update an entry
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Replace the tags
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete an entry and its images
    Del { id: String },
    /// Attach an image reference to an entry
    ImageAdd {
        entry_id: String,
        #[arg(long)]
        url: String,
        /// upload or camera
        #[arg(long, default_value = "upload")]
        kind: String,
    },
    /// Remove an image from an entry
    ImageDel { entry_id: String, image_id: String },
    /// List every tag in use
    Tags,
}
