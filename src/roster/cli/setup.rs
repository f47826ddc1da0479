use clap::{Parser, Subcommand};
use roster::index::Row;
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "Keep a list of people in the terminal, with CSV import and export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, global = true, env = "ROSTER_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (the default)
    Shell {
        /// CSV file to import when the session starts
        #[arg(short, long, value_name = "FILE")]
        load: Option<PathBuf>,
    },

    /// Print the people in a CSV file
    #[command(alias = "v")]
    View {
        file: PathBuf,

        /// Only show names containing this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., file-ext)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// One line typed inside a session.
#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Show the current view
    #[command(alias = "ls")]
    List,

    /// Only show names containing TERM; without TERM, show everyone
    #[command(alias = "f")]
    Filter { term: Option<String> },

    /// Add a person; without fields, opens the form
    #[command(alias = "n")]
    Add {
        /// NAME SURNAME AGE
        #[arg(value_name = "FIELD", allow_hyphen_values = true)]
        fields: Vec<String>,
    },

    /// Edit the person at ROW; without fields, opens the pre-filled form
    #[command(alias = "e")]
    Edit {
        row: Row,

        /// NAME SURNAME AGE
        #[arg(value_name = "FIELD", allow_hyphen_values = true)]
        fields: Vec<String>,
    },

    /// Delete the person at ROW
    #[command(alias = "rm")]
    Delete { row: Row },

    /// Add the people from a CSV file
    Import { file: PathBuf },

    /// Write everyone to a CSV file (defaults to personas-<date>)
    Export { file: Option<PathBuf> },

    /// Leave the session
    #[command(aliases = ["exit", "q"])]
    Quit,
}
