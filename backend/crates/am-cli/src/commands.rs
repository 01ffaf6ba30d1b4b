use crate::workflow::card_for;
use crate::{
    CliResult, SendIndicators, WebhookClient, WebhookResult, WorkflowCard, WorkflowRequest,
    WorkflowType, cards, find_card,
};

use am_session::{DEMO_HINT, SessionStore, UserData, authenticate};
use clap::Subcommand;
use log::{info, warn};
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with a demo account and start a new session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Display name (defaults to the username)
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// End the session and purge stored user data
    Logout,

    /// Show the current session
    Whoami {
        /// Print the stored blob including unrelated fields
        #[arg(long)]
        raw: bool,
    },

    /// Change fields of the current identity (no-op when logged out)
    Update {
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// List the workflow assistants
    Workflows,

    /// Send a test ping for a workflow card
    TestWebhook {
        /// Card slug (email, test, manual, economics, idea)
        #[arg(long, default_value = "test")]
        card: String,
    },

    /// Send a chat message to an assistant
    Chat {
        #[arg(long, default_value = "manual")]
        card: String,
        message: String,
    },

    /// Submit an idea or feedback
    Idea { text: String },

    /// Request an extract from the Economic assistant
    Economics {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        period: String,
    },
}

/// JSON to print and whether the command achieved what it was asked to.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub value: Value,
    pub success: bool,
}

impl CommandOutcome {
    fn ok(value: Value) -> Self {
        Self {
            value,
            success: true,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            value: json!({ "success": false, "error": error.into() }),
            success: false,
        }
    }
}

/// Run one command against the session and webhook client.
///
/// `indicators` carries the per-card send status across calls; a card that
/// is still sending refuses a second send.
pub async fn execute(
    command: Commands,
    session: &mut SessionStore,
    client: &WebhookClient,
    indicators: &SendIndicators,
) -> CliResult<CommandOutcome> {
    let outcome = match command {
        Commands::Login {
            username,
            password,
            name,
            email,
        } => {
            let Some(mode) = authenticate(&username, &password) else {
                warn!("Login failed for '{username}'");
                return Ok(CommandOutcome::failed(DEMO_HINT));
            };

            let identity = UserData {
                user_id: Some(username.clone()),
                user_name: Some(name.unwrap_or(username)),
                user_email: email,
                ..UserData::default()
            };
            session.login(identity);

            CommandOutcome::ok(json!({
                "mode": mode,
                "session": session.snapshot(),
            }))
        }

        Commands::Logout => {
            session.logout();
            CommandOutcome::ok(serde_json::to_value(session.snapshot())?)
        }

        Commands::Whoami { raw } => {
            if raw {
                CommandOutcome::ok(Value::Object(
                    session.storage().read_raw().unwrap_or_default(),
                ))
            } else {
                CommandOutcome::ok(serde_json::to_value(session.snapshot())?)
            }
        }

        Commands::Update {
            user_id,
            name,
            email,
        } => {
            if !session.is_logged_in() {
                info!("Not logged in; update ignored");
            }
            session.update_user_data(&UserData {
                user_id,
                user_name: name,
                user_email: email,
                ..UserData::default()
            });
            CommandOutcome::ok(serde_json::to_value(session.snapshot())?)
        }

        Commands::Workflows => CommandOutcome::ok(serde_json::to_value(cards())?),

        Commands::TestWebhook { card: slug } => {
            let Some(card) = find_card(&slug) else {
                return Ok(unknown_card(&slug));
            };
            send(client, indicators, card, WorkflowRequest::test_ping(card)).await?
        }

        Commands::Chat {
            card: slug,
            message,
        } => {
            let Some(card) = find_card(&slug) else {
                return Ok(unknown_card(&slug));
            };
            send(
                client,
                indicators,
                card,
                WorkflowRequest::ChatMessage { text: message },
            )
            .await?
        }

        Commands::Idea { text } => {
            send(
                client,
                indicators,
                card_for(WorkflowType::IdeaBox),
                WorkflowRequest::Idea { text },
            )
            .await?
        }

        Commands::Economics { customer, period } => {
            send(
                client,
                indicators,
                card_for(WorkflowType::Economics),
                WorkflowRequest::EconomicExtract { customer, period },
            )
            .await?
        }
    };

    Ok(outcome)
}

fn unknown_card(slug: &str) -> CommandOutcome {
    let known: Vec<&str> = cards().iter().map(|card| card.slug).collect();
    CommandOutcome::failed(format!(
        "Unknown workflow '{slug}'. Known workflows: {}",
        known.join(", ")
    ))
}

/// One send through the card's indicator, with its status transitions logged.
async fn send(
    client: &WebhookClient,
    indicators: &SendIndicators,
    card: &WorkflowCard,
    request: WorkflowRequest,
) -> CliResult<CommandOutcome> {
    let indicator = indicators.for_card(card);
    let Some(ticket) = indicator.begin() else {
        warn!("{}: send refused, previous send still running", card.title);
        return Ok(CommandOutcome::failed(format!(
            "A send to {} is already in progress",
            card.title
        )));
    };
    info!("{}: sending", card.title);

    let result = client.send(card, &request).await;
    indicator.finish(ticket, &result);

    let delay = request.reset_delay();
    info!(
        "{}: {:?} (resets after {:?})",
        card.title,
        indicator.status(),
        delay
    );
    tokio::spawn(async move { indicator.reset_after(ticket, delay).await });

    outcome_for(&result)
}

fn outcome_for(result: &WebhookResult) -> CliResult<CommandOutcome> {
    Ok(CommandOutcome {
        value: serde_json::to_value(result)?,
        success: result.is_success(),
    })
}
