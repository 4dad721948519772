//! Role listing command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vestry_client::api;
use vestry_core::error::AppError;
use vestry_core::types::DepartmentId;

use crate::output::{self, OutputFormat};

/// Arguments for `vestry roles`
#[derive(Debug, Args)]
pub struct RolesArgs {
    /// Department id to list roles for
    pub department: String,
}

/// Role display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RoleRow {
    /// Role ID
    id: String,
    /// Name
    name: String,
    /// Attached permissions
    permissions: String,
}

/// Execute the roles command
pub async fn execute(args: &RolesArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let ctx = super::build_context(env)?;
    let department_id: DepartmentId = args
        .department
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid department id: '{}'", args.department)))?;

    let roles = api::tenancy::fetch_roles(&ctx.client, &ctx.directory, department_id).await?;

    let rows: Vec<RoleRow> = roles
        .iter()
        .map(|role| RoleRow {
            id: role.id.to_string(),
            name: role.name.clone(),
            permissions: role
                .permissions
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
