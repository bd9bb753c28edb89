use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shatam::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shatam=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => cli::commands::init(force).await,
        Commands::Serve { host, port } => cli::commands::serve(host, port).await,
        Commands::Accounts { format } => cli::commands::accounts(format).await,
        Commands::Login {
            username,
            role,
            password,
        } => cli::commands::login(&username, &role, password).await,
        Commands::Signup {
            name,
            email,
            role,
            phone,
            location,
            age,
        } => cli::commands::signup(name, email, role, phone, location, age).await,
        Commands::Logout => cli::commands::logout().await,
        Commands::Whoami { format } => cli::commands::whoami(format).await,
        Commands::Nav { role } => cli::commands::nav(role).await,
    }
}
