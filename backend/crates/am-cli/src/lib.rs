//! am-cli library
//!
//! Exports the webhook dispatch client, the workflow catalog and the command
//! runner used by the `automate` binary.

pub(crate) mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod send_status;
pub mod webhook;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{CommandOutcome, Commands, execute};
pub use error::{CliError, Result as CliResult};
pub use send_status::{SendIndicator, SendIndicators, SendStatus, SendTicket};
pub use webhook::{
    AdditionalInfo, DispatchError, SUCCESS_MESSAGE, WebhookClient, WebhookPayload, WebhookResult,
    WorkflowRequest,
};
pub use workflow::{WorkflowCard, WorkflowType, card_for, cards, find_card};
