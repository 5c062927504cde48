use crate::core::sort::SortKey;
use crate::export::ExportFormat;
use crate::models::CollectionKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for paysched
/// CLI application to track a payment schedule against account balances
#[derive(Parser)]
#[command(
    name = "paysched",
    version = env!("CARGO_PKG_VERSION"),
    about = "A payment-schedule CLI: track unpresented cheques, approvals and requisitions against account balances, with CSV/PDF export",
    long_about = None
)]
pub struct Cli {
    /// Override data-file path (useful for tests or custom locations)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the seeded data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a payment entry to a collection
    Add {
        /// Target collection
        collection: CollectionKind,

        /// Payee / supplier name (required, non-empty)
        name: String,

        /// Free-text details
        #[arg(long = "details")]
        details: Option<String>,

        /// Amount, positive, rounded to 2 decimals (e.g. 392231 or 12.35)
        #[arg(long = "amount")]
        amount: String,

        /// Entry date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: String,
    },

    /// Edit an existing entry (only the provided fields change)
    Edit {
        /// Target collection
        collection: CollectionKind,

        /// Entry id (full uuid or a unique prefix as shown by `list`)
        id: String,

        #[arg(long = "name", help = "New payee/supplier name")]
        name: Option<String>,

        #[arg(long = "details", help = "New details text")]
        details: Option<String>,

        #[arg(long = "amount", help = "New amount (positive, 2 decimals)")]
        amount: Option<String>,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Delete an entry by id
    Del {
        /// Target collection
        collection: CollectionKind,

        /// Entry id (full uuid or a unique prefix as shown by `list`)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List the schedule tables as of the schedule date
    List {
        /// Show a single collection (default: all three)
        collection: Option<CollectionKind>,

        /// Sort by column
        #[arg(long = "sort", value_enum)]
        sort: Option<SortKey>,

        /// Sort descending (with --sort)
        #[arg(long = "desc", requires = "sort")]
        desc: bool,

        /// Bypass the schedule-date filter and show every entry
        #[arg(long = "all")]
        all: bool,
    },

    /// Show the aggregate figures and the expense breakdown
    Summary,

    /// Show or set the account balances
    Balance {
        #[arg(long = "equity", help = "Set the equity account balance")]
        equity: Option<String>,

        #[arg(long = "till", help = "Set the till balance")]
        till: Option<String>,

        #[arg(long = "pesapal", help = "Set the pesapal balance")]
        pesapal: Option<String>,
    },

    /// Set the schedule (as-at cutoff) date
    Date {
        /// New schedule date (YYYY-MM-DD)
        date: String,
    },

    /// Export the schedule document
    Export {
        /// Export format: csv, json, pdf
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (default: <prefix>_<scheduleDate>.<ext>)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Sort rows by column (applies to CSV and PDF alike)
        #[arg(long = "sort", value_enum)]
        sort: Option<SortKey>,

        /// Sort descending (with --sort)
        #[arg(long = "desc", requires = "sort")]
        desc: bool,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the data file
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup to a .zip
        #[arg(long)]
        compress: bool,
    },
}
