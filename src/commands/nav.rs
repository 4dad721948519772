//! Navigation preview command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vestry_auth::resolver::{LOGOUT_PERMISSION, PermissionResolver};
use vestry_client::api;
use vestry_core::error::AppError;
use vestry_nav::{NavComposer, NavEntry};

use crate::output::{self, OutputFormat};

/// Arguments for `vestry nav`
#[derive(Debug, Args)]
pub struct NavArgs {
    /// Current location, used to mark the active entry
    #[arg(long, default_value = "/dashboard")]
    pub at: String,
}

/// The console's declared menu.
fn menu() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Dashboard", "/dashboard", "View Main Dashboard"),
        NavEntry::new("Congregations", "/congregations", "View Congregation Records"),
        NavEntry::new("Accounts", "/accounts", "Manage Organization Accounts"),
        NavEntry::new("Departments", "/departments", "Manage Departments"),
        NavEntry::new("Roles", "/roles", "Manage Roles"),
        NavEntry::new("Reports", "/reports", "View Financial Reports"),
        NavEntry::new("Sign out", "/logout", LOGOUT_PERMISSION),
    ]
}

/// Navigation display row for table output
#[derive(Debug, Serialize, Tabled)]
struct NavRow {
    /// Label
    label: String,
    /// Destination
    destination: String,
    /// Active marker
    active: String,
}

/// Execute the nav command
pub async fn execute(args: &NavArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let ctx = super::build_context(env)?;

    if let Err(e) = api::tenancy::sync(&ctx.client, &ctx.directory).await {
        output::print_warning(&format!(
            "Could not load tenancy data ({}); showing the minimum menu",
            e
        ));
    }

    let resolver = PermissionResolver::new(ctx.session.clone(), ctx.directory.clone());
    let composer = NavComposer::new(resolver);
    let items = composer.compose(&menu(), &args.at);

    let rows: Vec<NavRow> = items
        .iter()
        .map(|item| NavRow {
            label: item.entry.label.clone(),
            destination: item.entry.destination.clone(),
            active: if item.active { "●".to_string() } else { String::new() },
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
