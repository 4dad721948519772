//! Current-principal display command.

use vestry_auth::resolver::PermissionResolver;
use vestry_client::api;
use vestry_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Execute the whoami command
pub async fn execute(env: &str, format: OutputFormat) -> Result<(), AppError> {
    let ctx = super::build_context(env)?;

    let Some(user) = ctx.session.principal() else {
        output::print_warning("Not signed in");
        return Ok(());
    };

    // Role names live in the tenancy directory; load it best-effort.
    let mut role_name = None;
    if user.role_id.is_some() {
        if let Err(e) = api::tenancy::sync(&ctx.client, &ctx.directory).await {
            output::print_warning(&format!("Could not load tenancy data: {}", e));
        }
        let resolver = PermissionResolver::new(ctx.session.clone(), ctx.directory.clone());
        role_name = resolver.current_role().map(|role| role.name);
    }

    match format {
        OutputFormat::Json => output::print_json(&user),
        OutputFormat::Table => {
            output::print_kv("Username", &user.username);
            output::print_kv("Display name", &user.display_name);
            output::print_kv("Email", user.email.as_deref().unwrap_or("-"));
            output::print_kv("Status", user.status.as_str());
            output::print_kv("Tenant", &user.tenant.to_string());
            output::print_kv("Role", role_name.as_deref().unwrap_or("(pending)"));
        }
    }
    Ok(())
}
