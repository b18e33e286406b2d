use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ProfitRider
/// CLI application to log delivery sessions and estimate their profit with SQLite
#[derive(Parser)]
#[command(
    name = "profitrider",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track delivery-courier work sessions and estimate their profitability using SQLite",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or update the courier profile (without flags: show)
    Profile {
        #[arg(long = "courier-type", help = "solopreneur | fleet")]
        courier_type: Option<String>,

        #[arg(long = "fee", help = "Fleet/company fee taken from gross earnings, in percent (0-100)")]
        fee: Option<String>,

        #[arg(long = "transport", help = "bicycle | motorcycle | car | scooter")]
        transport: Option<String>,

        #[arg(long = "fuel-rate", help = "Default fuel cost per km")]
        fuel_rate: Option<String>,

        #[arg(long = "depreciation-rate", help = "Default depreciation (value loss) per km")]
        depreciation_rate: Option<String>,

        #[arg(long = "rent", help = "Vehicle rent amount")]
        rent: Option<String>,

        #[arg(long = "rent-frequency", help = "daily | weekly | monthly")]
        rent_frequency: Option<String>,

        #[arg(long = "currency", help = "Currency symbol used in reports")]
        currency: Option<String>,
    },

    /// Manage the delivery platforms you work with
    Platform {
        #[arg(long = "add", value_name = "NAME", help = "Add a platform")]
        add: Option<String>,

        #[arg(long = "remove", value_name = "ID|NAME", help = "Remove an unused platform")]
        remove: Option<String>,

        #[arg(long = "list", help = "List platforms (default)")]
        list: bool,
    },

    /// Log a work session (times accept 18:30, 6:30 PM, 6:30pm, ...)
    Add {
        #[arg(long = "date", help = "Session day (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "start", help = "Start time (default from config)")]
        start: Option<String>,

        #[arg(long = "end", help = "End time; earlier than start means past midnight")]
        end: Option<String>,

        #[arg(long = "platform", value_name = "ID|NAME", help = "Delivery platform")]
        platform: Option<String>,

        #[arg(long = "orders", help = "Number of orders delivered")]
        orders: Option<String>,

        #[arg(long = "km", help = "Distance driven in km")]
        km: Option<String>,

        #[arg(long = "gross", help = "Gross pay")]
        gross: Option<String>,

        #[arg(long = "tips", help = "Tips received")]
        tips: Option<String>,

        #[arg(long = "fuel", help = "Fuel cost (ignored for bicycle/scooter)")]
        fuel: Option<String>,

        #[arg(
            long = "depreciation",
            help = "Depreciation cost (default: km x profile depreciation rate)"
        )]
        depreciation: Option<String>,

        #[arg(long = "other", help = "Other expenses")]
        other: Option<String>,

        #[arg(long = "preview", help = "Show the estimate without saving")]
        preview: bool,
    },

    /// List logged sessions
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (A:B)")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's sessions")]
        now: bool,
    },

    /// Delete a session by ID
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Dashboard: totals and per-unit profit over a period
    Summary {
        #[arg(long, short, help = "today | week | month (default from config)")]
        period: Option<String>,

        #[arg(long = "date", help = "Local reference day (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Export session history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
