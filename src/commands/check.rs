//! Permission check command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vestry_auth::resolver::PermissionResolver;
use vestry_client::api;
use vestry_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for `vestry check`
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Permission names to check, e.g. "Manage Roles"
    #[arg(required = true, num_args = 1..)]
    pub permissions: Vec<String>,
}

/// Check result row for table output
#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    /// Permission name
    permission: String,
    /// Whether the principal holds it
    granted: bool,
}

/// Execute the check command
pub async fn execute(args: &CheckArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let ctx = super::build_context(env)?;

    if let Err(e) = api::tenancy::sync(&ctx.client, &ctx.directory).await {
        output::print_warning(&format!(
            "Could not load tenancy data ({}); checks run against an empty snapshot",
            e
        ));
    }

    let resolver = PermissionResolver::new(ctx.session.clone(), ctx.directory.clone());
    let rows: Vec<CheckRow> = args
        .permissions
        .iter()
        .map(|permission| CheckRow {
            permission: permission.clone(),
            granted: resolver.has_permission(permission),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
