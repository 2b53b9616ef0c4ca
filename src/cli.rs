use crate::export::ExportFormat;
use crate::models::Role;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attendlog
/// CLI front-end for the attendance ledger
#[derive(Parser)]
#[command(
    name = "attendlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: register users, punch a time-in/time-out clock, export records to spreadsheets",
    long_about = None
)]
pub struct Cli {
    /// Override data directory (useful for tests or shared stores)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// User ID asserting the operation
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Display name asserting the operation
    #[arg(global = true, long = "name", short = 'n')]
    pub name: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data directory
    Init,

    /// Verify an identity and show its role and open session
    Login,

    /// Register a new user account
    Register {
        /// User ID (unique, case-insensitive)
        user_id: String,

        /// Display name (unique, case-insensitive)
        display_name: String,

        /// Account role; elevated and admin registrations require admin
        /// credentials via --user/--name
        #[arg(long, value_enum, default_value_t = Role::Regular)]
        role: Role,
    },

    /// List registered users, or delete one (admin only)
    Users {
        /// Delete the account with this user ID
        #[arg(long = "delete", value_name = "USER_ID")]
        delete: Option<String>,
    },

    /// Punch in: open a session for --user/--name
    In,

    /// Punch out: close the caller's open session
    Out {
        /// Close this session ID instead of looking up the caller's open
        /// session
        #[arg(long = "session", value_name = "SESSION_ID")]
        session: Option<String>,
    },

    /// Open a parallel session without a prior punch out (elevated only)
    Auto,

    /// Force-close another user's open session (admin only)
    ForceOut {
        /// Session ID to terminate
        session_id: String,
    },

    /// List open sessions
    Sessions,

    /// List attendance records (admins see all, others their own)
    Records,

    /// Export attendance records to a spreadsheet (elevated only)
    Export {
        /// Export format: xlsx, csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value_t = ExportFormat::Xlsx)]
        format: ExportFormat,

        /// Output file path (absolute); default is a timestamped file in
        /// the downloads folder
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List the export history, or copy an artifact (admin only)
    Exports {
        /// Copy export artifact number N (as listed) to --file
        #[arg(long, value_name = "N", requires = "file")]
        copy: Option<usize>,

        /// Destination path for --copy
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },
}
