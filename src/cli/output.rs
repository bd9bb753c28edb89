//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::auth::{Role, SessionUser};
use crate::site::Destination;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

fn role_color(role: Role) -> Color {
    match role {
        Role::Admin => Color::Magenta,
        Role::Caregiver => Color::Green,
        Role::Careseeker => Color::Blue,
    }
}

/// Print a table of roster accounts
pub fn print_account_table(accounts: &[(&str, &SessionUser)]) {
    if accounts.is_empty() {
        info("No accounts found");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Username").fg(Color::Cyan),
            Cell::new("Name").fg(Color::Cyan),
            Cell::new("Email").fg(Color::Cyan),
            Cell::new("Role").fg(Color::Cyan),
            Cell::new("Phone").fg(Color::Cyan),
            Cell::new("Location").fg(Color::Cyan),
        ]);

    for (username, user) in accounts {
        table.add_row(vec![
            Cell::new(username),
            Cell::new(&user.name),
            Cell::new(&user.email),
            Cell::new(user.role.label()).fg(role_color(user.role)),
            Cell::new(&user.phone),
            Cell::new(&user.location),
        ]);
    }

    println!("{table}");
}

/// Print the session user
pub fn print_user(user: &SessionUser) {
    println!("{}", "Current Session".bold().underline());
    println!();
    println!("  {} {}", "Name:".bold(), user.name);
    println!("  {} {}", "Email:".bold(), user.email);
    println!("  {} {}", "Role:".bold(), user.role.label());
    if !user.phone.is_empty() {
        println!("  {} {}", "Phone:".bold(), user.phone);
    }
    if !user.location.is_empty() {
        println!("  {} {}", "Location:".bold(), user.location);
    }
    if let Some(age) = &user.age {
        println!("  {} {}", "Age:".bold(), age);
    }
}

/// Print a navigation set
pub fn print_navigation(role: Option<&str>, destinations: &[Destination]) {
    let heading = match role {
        Some(role) => format!("Navigation for '{}'", role),
        None => "Navigation for visitors".to_string(),
    };
    println!("{}", heading.bold());
    for destination in destinations {
        println!("  {} {}", destination.label(), destination.path().dimmed());
    }
}
