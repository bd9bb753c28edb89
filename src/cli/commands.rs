//! CLI command implementations

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs;
use std::sync::Arc;

use crate::api;
use crate::auth::{FileStorage, LoginRequest, Roster, SessionSigner, SessionStore, SignupRequest};
use crate::cli::{error, info, print_account_table, print_navigation, print_user, success, warn, OutputFormat};
use crate::config::{self, loader::CONFIG_FILENAME, Config};
use crate::site;

/// Write a shatam.toml configuration file
pub async fn init(force: bool) -> Result<()> {
    let config_path = std::path::Path::new(CONFIG_FILENAME);

    if config_path.exists() && !force {
        warn(&format!("{} already exists (use --force to overwrite)", CONFIG_FILENAME));
        return Ok(());
    }

    let secret = uuid::Uuid::new_v4().simple().to_string();
    fs::write(config_path, config::loader::default_config_content(&secret))?;

    success(&format!("Created {}", CONFIG_FILENAME));
    info("Run 'shatam serve' to start the site");

    Ok(())
}

/// Start the HTTP server
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = load_config()?;
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    info(&format!("Starting server on http://{}:{}", host, port));
    api::run_server(config, &host, port).await?;
    Ok(())
}

/// List the demo accounts
pub async fn accounts(format: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let roster = Roster::demo(config.auth.bcrypt_cost)?;
    let accounts: Vec<_> = roster.accounts().collect();

    match format {
        OutputFormat::Table => print_account_table(&accounts),
        OutputFormat::Json => {
            let users: Vec<_> = accounts.iter().map(|(_, user)| user).collect();
            println!("{}", serde_json::to_string_pretty(&users)?);
        }
        OutputFormat::Yaml => {
            let users: Vec<_> = accounts.iter().map(|(_, user)| user).collect();
            println!("{}", serde_yaml::to_string(&users)?);
        }
    }

    Ok(())
}

/// Log in and persist the session
pub async fn login(username: &str, role: &str, password: Option<String>) -> Result<()> {
    let config = load_config()?;
    let mut session = open_session(&config)?;

    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let request = LoginRequest {
        username: username.to_string(),
        password,
        role: role.to_string(),
    };

    if !session.login(&request) {
        error("Invalid credentials. Please check your username, password, and role.");
        anyhow::bail!("Login failed");
    }

    if let Some(user) = session.current() {
        success(&format!(
            "Welcome back! You're logged in as a {}.",
            user.role
        ));
        info(&format!("Landing page: {}", site::landing_path(user.role)));
    }
    Ok(())
}

/// Create an account and persist the session
pub async fn signup(
    name: String,
    email: String,
    role: String,
    phone: String,
    location: String,
    age: Option<String>,
) -> Result<()> {
    let config = load_config()?;
    let mut session = open_session(&config)?;

    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let request = SignupRequest {
        name,
        email,
        phone,
        confirm_password: password.clone(),
        password,
        role,
        location,
        age,
    };

    let user = session.signup(request.validate()?);
    success(&format!(
        "Welcome to Shatam! Your {} account has been created.",
        user.role
    ));
    Ok(())
}

/// Clear the persisted session
pub async fn logout() -> Result<()> {
    let config = load_config()?;
    let mut session = open_session(&config)?;

    if !session.is_authenticated() {
        info("Not logged in");
        return Ok(());
    }

    session.logout();
    success("Logged out");
    Ok(())
}

/// Show the current session
pub async fn whoami(format: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let session = open_session(&config)?;

    let Some(user) = session.current() else {
        info("Not logged in. Run 'shatam login <username>' to sign in");
        return Ok(());
    };

    match format {
        OutputFormat::Table => print_user(user),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(user)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(user)?),
    }
    Ok(())
}

/// Show the navigation for a role name
pub async fn nav(role: Option<String>) -> Result<()> {
    let destinations = site::navigation_for_role_name(role.as_deref());
    print_navigation(role.as_deref(), destinations);
    Ok(())
}

// Helper functions

fn load_config() -> Result<Config> {
    config::load_config_or_default().map_err(|e| anyhow::anyhow!("{}", e))
}

fn open_session(config: &Config) -> Result<SessionStore> {
    let roster = Arc::new(Roster::demo(config.auth.bcrypt_cost)?);
    let signer = SessionSigner::from_config(&config.auth);
    let storage = FileStorage::new(&config.storage.path);
    Ok(SessionStore::open(roster, signer, storage))
}
