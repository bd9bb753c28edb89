//! CLI interface for Shatam

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "shatam")]
#[command(version)]
#[command(about = "Care marketplace site with role-aware navigation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a shatam.toml configuration file with a fresh signing secret
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Start the web site and JSON API
    Serve {
        /// Host to bind to (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the demo accounts
    Accounts {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Log in with a username or email; the session persists across runs
    Login {
        /// Username or email
        username: String,

        /// Role to log in as
        #[arg(short, long, default_value = "careseeker")]
        role: String,

        /// Password (prompted for when omitted)
        #[arg(short, long, env = "SHATAM_PASSWORD")]
        password: Option<String>,
    },

    /// Create a new account and log in as it
    Signup {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Role for the new account
        #[arg(short, long, default_value = "careseeker")]
        role: String,

        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Location
        #[arg(long, default_value = "")]
        location: String,

        /// Age
        #[arg(long)]
        age: Option<String>,
    },

    /// Clear the persisted session
    Logout,

    /// Show the current session
    Whoami {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the navigation for a role (or for a logged-out visitor)
    Nav {
        /// Role name; omit for a logged-out visitor
        #[arg(short, long)]
        role: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
