//! Sign-in command.

use clap::Args;

use vestry_client::api;
use vestry_core::error::AppError;

use crate::output;

/// Arguments for `vestry login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password (prompted when omitted; prefer the prompt)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, env: &str) -> Result<(), AppError> {
    let ctx = super::build_context(env)?;

    let username = match &args.username {
        Some(u) => u.clone(),
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    let user = match api::auth::login(&ctx.client, &username, &password).await {
        Ok(user) => user,
        Err(e) if e.is_login_required() => {
            return Err(AppError::unauthenticated("Invalid username or password"));
        }
        Err(e) => return Err(e),
    };

    output::print_success(&format!("Signed in as {}", user.display_name));
    output::print_kv("Username", &user.username);
    output::print_kv("Status", user.status.as_str());
    output::print_kv("Tenant", &user.tenant.to_string());
    if user.role_id.is_none() {
        output::print_warning("Account is pending role assignment; most surfaces will be hidden");
    }
    Ok(())
}
