//! Organization listing command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vestry_client::api;
use vestry_core::error::AppError;
use vestry_core::types::HeadquartersId;

use crate::output::{self, OutputFormat};

/// Arguments for `vestry orgs`
#[derive(Debug, Args)]
pub struct OrgsArgs {
    /// Headquarters id to list organizations for
    pub headquarters: String,
}

/// Organization display row for table output
#[derive(Debug, Serialize, Tabled)]
struct OrgRow {
    /// Organization ID
    id: String,
    /// Name
    name: String,
    /// Created at
    created_at: String,
}

/// Execute the orgs command
pub async fn execute(args: &OrgsArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let ctx = super::build_context(env)?;
    let headquarters_id: HeadquartersId = args
        .headquarters
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid headquarters id: '{}'", args.headquarters)))?;

    let organizations =
        api::tenancy::fetch_organizations(&ctx.client, &ctx.directory, headquarters_id).await?;

    let rows: Vec<OrgRow> = organizations
        .iter()
        .map(|org| OrgRow {
            id: org.id.to_string(),
            name: org.name.clone(),
            created_at: org.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
