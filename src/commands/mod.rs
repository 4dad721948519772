//! Console command definitions and dispatch.

pub mod check;
pub mod login;
pub mod logout;
pub mod nav;
pub mod orgs;
pub mod roles;
pub mod whoami;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use vestry_auth::directory::TenancyDirectory;
use vestry_auth::session::{FileSessionStore, SessionContext};
use vestry_client::ApiClient;
use vestry_core::config::AppConfig;
use vestry_core::error::AppError;

use crate::output::OutputFormat;

/// Vestry — organizational administration console
#[derive(Debug, Parser)]
#[command(name = "vestry", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment overlay (config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and persist the session
    Login(login::LoginArgs),
    /// Sign out and clear the session
    Logout,
    /// Show the signed-in principal
    Whoami,
    /// Show the navigation the current principal may see
    Nav(nav::NavArgs),
    /// Check named permissions against the current principal
    Check(check::CheckArgs),
    /// List the organizations of a headquarters
    Orgs(orgs::OrgsArgs),
    /// List the roles of a department
    Roles(roles::RolesArgs),
}

impl Cli {
    /// Execute the console command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => login::execute(args, &self.env).await,
            Commands::Logout => logout::execute(&self.env).await,
            Commands::Whoami => whoami::execute(&self.env, self.format).await,
            Commands::Nav(args) => nav::execute(args, &self.env, self.format).await,
            Commands::Check(args) => check::execute(args, &self.env, self.format).await,
            Commands::Orgs(args) => orgs::execute(args, &self.env, self.format).await,
            Commands::Roles(args) => roles::execute(args, &self.env, self.format).await,
        }
    }
}

/// Everything a command needs, wired from configuration.
pub struct AppContext {
    /// The persisted session, hydrated from disk.
    pub session: SessionContext,
    /// The tenancy snapshot for this invocation.
    pub directory: Arc<TenancyDirectory>,
    /// The authenticated API client.
    pub client: ApiClient,
}

/// Helper: wire session, directory and client from configuration.
pub fn build_context(env: &str) -> Result<AppContext, AppError> {
    let config = AppConfig::load(env)?;
    let store = Arc::new(FileSessionStore::new(&config.session.path));
    let session = SessionContext::new(store)?;
    let client = ApiClient::new(&config.api, session.clone())?;
    let directory = Arc::new(TenancyDirectory::new());

    Ok(AppContext {
        session,
        directory,
        client,
    })
}
