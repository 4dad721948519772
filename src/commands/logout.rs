//! Sign-out command.

use vestry_client::api;
use vestry_core::error::AppError;

use crate::output;

/// Execute the logout command
pub async fn execute(env: &str) -> Result<(), AppError> {
    let ctx = super::build_context(env)?;

    if !ctx.session.is_authenticated() && ctx.session.tenant().is_none() {
        output::print_warning("No active session");
        return Ok(());
    }

    api::auth::logout(&ctx.client, &ctx.directory).await?;
    output::print_success("Signed out");
    Ok(())
}
