use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hudoor,
/// an attendance tracker for multi-city volunteer and trainee programs.
#[derive(Parser)]
#[command(
    name = "hudoor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance tracking CLI: check-in/out, imports, KPI analytics and exports",
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
    /// Initialize the configuration and storage database
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Record a check-in for a participant
    Checkin {
        /// Participant full name
        name: String,

        /// Mobile number (05XXXXXXXX)
        phone: String,

        /// Participant type: متطوع/متدرب/تمهير or volunteer/trainee/preparatory
        #[arg(long = "type", value_name = "TYPE")]
        kind: String,

        /// Branch city (defaults to `default_city` from the config)
        #[arg(long)]
        city: Option<String>,

        /// Volunteer opportunity (volunteers only)
        #[arg(long)]
        opportunity: Option<String>,

        /// National ID (volunteers only, 1XXXXXXXXX)
        #[arg(long = "national-id", value_name = "ID")]
        national_id: Option<String>,
    },

    /// Close today's most recent open session for a phone number
    Checkout {
        /// Mobile number used at check-in
        phone: String,

        /// Branch city (defaults to `default_city` from the config)
        #[arg(long)]
        city: Option<String>,
    },

    /// Set or replace the notes of a record
    Note {
        /// Record id
        id: i64,

        /// Note text (empty string clears the note)
        text: String,
    },

    /// Delete a record by id
    Del {
        /// Record id
        id: i64,
    },

    /// List attendance records
    List {
        #[arg(long, help = "Filter by branch city")]
        city: Option<String>,

        #[arg(long, help = "Filter by phone number (substring match)")]
        phone: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Only records on or after this date")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Only records on or before this date")]
        to: Option<String>,

        #[arg(long, help = "Filter by participant type")]
        category: Option<String>,

        #[arg(long, help = "Include imported history in the default view")]
        all: bool,
    },

    /// Show the KPI dashboard (requires admin credentials)
    Stats {
        #[arg(long, short = 'u')]
        user: String,

        #[arg(long, short = 'p')]
        password: String,

        #[arg(long, help = "Filter by branch city")]
        city: Option<String>,

        #[arg(long, help = "Filter by phone number (substring match)")]
        phone: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,
    },

    /// Import historical attendance from a CSV or XLSX file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Branch city the imported records belong to
        #[arg(long)]
        city: Option<String>,
    },

    /// Export attendance data or KPI analytics
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export the per-category KPI summary instead of records")]
        kpi: bool,

        #[arg(long, help = "Filter by branch city")]
        city: Option<String>,

        #[arg(long, help = "Filter by phone number (substring match)")]
        phone: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,

        #[arg(long, help = "Filter by participant type")]
        category: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the storage database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
