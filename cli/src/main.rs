//! mintdesk — staff console CLI for the coin rewards platform.

use anyhow::Context;
use clap::Parser;
use mintdesk_backend_http::ApiClient;
use mintdesk_console::{
    ConsoleConfig, CreditStatus, SessionContext, WorkflowOrchestrator,
};
use mintdesk_types::{SubmissionId, Timestamp, UserId};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "mintdesk", about = "Staff console for the coin rewards platform")]
struct Cli {
    /// Base URL of the platform admin API.
    /// When a config file is provided, defaults to the file's value.
    #[arg(long, env = "MINTDESK_BACKEND_URL")]
    backend_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "MINTDESK_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Staff account name recorded on the session.
    #[arg(long, default_value = "cli-operator", env = "MINTDESK_STAFF_USER")]
    staff_user: String,

    /// Auth token for the admin API.
    #[arg(long, default_value = "", env = "MINTDESK_AUTH_TOKEN")]
    auth_token: String,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Inspect or moderate a user account.
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Review a user's submitted screenshots.
    Review {
        /// The user whose submissions to review.
        user_id: String,

        /// Submission ids to approve (comma-separated).
        #[arg(long, value_delimiter = ',')]
        approve: Vec<String>,

        /// Submission ids to reject (comma-separated).
        #[arg(long, value_delimiter = ',')]
        reject: Vec<String>,

        /// Finalize the batch and credit the approved total.
        #[arg(long)]
        finalize: bool,
    },
}

#[derive(clap::Subcommand)]
enum UserAction {
    /// Show a user's profile and balance.
    Show { user_id: String },
    /// Flip a user's access state (ban or unban).
    Toggle { user_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mintdesk_utils::init_tracing();

    let cli = Cli::parse();
    let config = resolve_config(&cli);

    let client = ApiClient::new(&config.backend_url, config.request_timeout())
        .map_err(|e| anyhow::anyhow!("cannot build API client: {e}"))?;
    let session = SessionContext::login(&cli.staff_user, &cli.auth_token, Timestamp::now());
    let mut console = WorkflowOrchestrator::new(Arc::new(client), config, session);

    match cli.command {
        Command::User { action } => run_user(&mut console, action).await,
        Command::Review {
            user_id,
            approve,
            reject,
            finalize,
        } => run_review(&mut console, &user_id, &approve, &reject, finalize).await,
    }
}

async fn run_user(console: &mut WorkflowOrchestrator, action: UserAction) -> anyhow::Result<()> {
    match action {
        UserAction::Show { user_id } => {
            let user = console
                .load_user(&UserId::from(user_id.as_str()))
                .await
                .with_context(|| format!("cannot load user {user_id}"))?;
            println!("{} <{}>", user.display_name, user.email);
            println!("  id:      {}", user.id);
            println!("  balance: {}", user.balance);
            println!("  access:  {:?}", user.access_state);
        }
        UserAction::Toggle { user_id } => {
            console
                .load_user(&UserId::from(user_id.as_str()))
                .await
                .with_context(|| format!("cannot load user {user_id}"))?;
            let outcome = console
                .toggle_access()
                .await
                .context("access toggle failed; state unchanged")?;
            println!(
                "{} is now {:?}",
                outcome.user.display_name, outcome.new_state
            );
        }
    }
    Ok(())
}

async fn run_review(
    console: &mut WorkflowOrchestrator,
    user_id: &str,
    approve: &[String],
    reject: &[String],
    finalize: bool,
) -> anyhow::Result<()> {
    let user = console
        .load_user(&UserId::from(user_id))
        .await
        .with_context(|| format!("cannot load user {user_id}"))?;
    let count = console.open_review_session(None).await?;
    println!("reviewing {count} submissions from {}", user.display_name);

    let now = Timestamp::now();
    for record in console.session_records()? {
        println!(
            "  [{}] {} — {} ({})",
            record.id,
            record.title,
            record.reward_coins,
            mintdesk_utils::format_age(record.submitted_at, now)
        );
    }

    for id in approve {
        console.approve(&SubmissionId::from(id.as_str()))?;
    }
    for id in reject {
        console.reject(&SubmissionId::from(id.as_str()))?;
    }

    let aggregates = console.aggregates()?;
    println!(
        "approved {} for a total of {}{}",
        aggregates.approved_count,
        aggregates.total_approved_coins,
        if aggregates.all_approved { " (all)" } else { "" }
    );

    if finalize {
        let report = console.finalize_and_credit().await?;
        match report.credit {
            CreditStatus::Credited(user) => {
                println!("credited {}; new balance {}", report.summary.total_approved_coins, user.balance);
            }
            CreditStatus::Failed(e) => {
                println!(
                    "review recorded, but crediting {} failed: {e}; re-run the credit once the backend recovers",
                    report.summary.total_approved_coins
                );
            }
        }
    }
    Ok(())
}

/// File settings are the base; CLI flags (and their env fallbacks) override.
fn resolve_config(cli: &Cli) -> ConsoleConfig {
    let mut config = cli
        .config
        .as_deref()
        .and_then(load_file_config)
        .unwrap_or_default();
    if let Some(url) = &cli.backend_url {
        config.backend_url = url.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.request_timeout_secs = secs;
    }
    config
}

fn load_file_config(path: &Path) -> Option<ConsoleConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<ConsoleConfig>(&contents) {
            Ok(config) => {
                tracing::info!("loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                tracing::warn!("failed to parse config file: {e}, using defaults");
                None
            }
        },
        Err(e) => {
            tracing::warn!("failed to read config file {}: {e}, using defaults", path.display());
            None
        }
    }
}
