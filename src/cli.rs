use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Teradata connection profiles and reporting-month helpers.
#[derive(Parser)]
#[command(name = "tdprofile", version, about = "Teradata profile / account management")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Profile list file; defaults to $TDPROFILE_HOME/profiles.json.
    #[arg(long, global = true)]
    pub profiles: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the profile home and an empty profile list.
    Init,
    /// List stored profiles.
    List,
    /// Add a profile; prompts for anything not given as a flag.
    Add(AddArgs),
    /// Remove a profile by name.
    Remove { name: String },
    /// Show one profile.
    Show {
        name: String,
        /// Print the decoded password.
        #[arg(long)]
        reveal: bool,
    },
    /// Print the connection string for a profile.
    Conn(ConnArgs),
    /// Reporting-month arithmetic on YYYYMM keys.
    #[command(subcommand)]
    Month(MonthCommand),
}

#[derive(clap::Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
    /// Host / DBC name.
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    /// Overwrite an existing profile with the same name.
    #[arg(long)]
    pub replace: bool,
}

#[derive(clap::Args)]
pub struct ConnArgs {
    pub name: String,
    /// Default database for the session.
    #[arg(long)]
    pub database: Option<String>,
    /// ODBC driver name.
    #[arg(long, default_value = tdprofile::DEFAULT_DRIVER)]
    pub driver: String,
    /// Include the real password instead of a mask.
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Subcommand)]
pub enum MonthCommand {
    /// Current month key.
    Now,
    /// Validate and echo a key.
    Key { key: String },
    /// Key `n` months after `key`.
    Add { key: String, n: i32 },
    /// Key `n` months before `key`.
    Sub { key: String, n: i32 },
    /// Fiscal-year label of a calendar month.
    Fy {
        key: String,
        /// First month of the fiscal year (defaults to settings, normally 10).
        #[arg(long)]
        start: Option<u8>,
    },
    /// Calendar-year label of a fiscal month.
    Cy {
        key: String,
        #[arg(long)]
        start: Option<u8>,
    },
    /// First and last calendar day.
    Days { key: String },
    /// Every key from `from` to `to`, inclusive.
    Range { from: String, to: String },
}
