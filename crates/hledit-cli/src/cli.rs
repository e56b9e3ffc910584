use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::filter::LevelFilter;

use hledit_core::VERSION;

/// hledit - recategorise postings in a plaintext ledger without touching the rest of it
#[derive(Parser)]
#[command(name = "hledit")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the ledger text, account options and preferences
    #[arg(short, long, global = true, env = "HLEDIT_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Logging verbosity: off, error, warn, info, debug, trace.
    /// Overridden by RUST_LOG when set.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,
}

/// Arguments for the `load` command
#[derive(Args)]
pub struct LoadArgs {
    /// Ledger file to load (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only show transactions with a posting on this account
    #[arg(long)]
    pub account: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Transaction index (as shown by `hledit list`)
    #[arg(value_name = "TXN")]
    pub transaction: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set-account` command
#[derive(Args)]
pub struct SetAccountArgs {
    /// Transaction index
    #[arg(value_name = "TXN")]
    pub transaction: usize,

    /// Posting index within the transaction
    #[arg(value_name = "POSTING")]
    pub posting: usize,

    /// New account name
    #[arg(value_name = "ACCOUNT")]
    pub account: String,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Transaction index
    #[arg(value_name = "TXN")]
    pub transaction: usize,

    /// Posting index within the transaction
    #[arg(value_name = "POSTING")]
    pub posting: usize,
}

/// Arguments for the `categorize` command
#[derive(Args)]
pub struct CategorizeArgs {
    /// Account to work through (defaults to the highlighted account)
    #[arg(long)]
    pub account: Option<String>,
}

/// Arguments for the `options` command
#[derive(Args)]
pub struct OptionsArgs {
    #[command(subcommand)]
    pub command: OptionsCommand,
}

#[derive(Subcommand)]
pub enum OptionsCommand {
    /// Replace the account options (one per line) from FILE or stdin
    Load {
        #[arg(value_name = "FILE")]
        file: Option<String>,
    },

    /// List the account options
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Arguments for the `prefs` command
#[derive(Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsCommand,
}

#[derive(Subcommand)]
pub enum PrefsCommand {
    /// Show the current preferences
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the fixed account (clears it when ACCOUNT is omitted)
    Fixed {
        #[arg(value_name = "ACCOUNT")]
        account: Option<String>,
    },

    /// Set the highlighted account (clears it when ACCOUNT is omitted)
    Highlight {
        #[arg(value_name = "ACCOUNT")]
        account: Option<String>,
    },
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the ledger text from a file or stdin
    Load(LoadArgs),

    /// Write the ledger text out verbatim
    Export(ExportArgs),

    /// List transactions and postings with their indices
    List(ListArgs),

    /// Show one transaction
    Show(ShowArgs),

    /// Set the account of one posting
    SetAccount(SetAccountArgs),

    /// Pick a new account for one posting from the account options
    Edit(EditArgs),

    /// Walk every posting on an account and pick a new account for each
    Categorize(CategorizeArgs),

    /// Manage the account options offered by `edit` and `categorize`
    Options(OptionsArgs),

    /// Show or set the fixed and highlighted accounts
    Prefs(PrefsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
