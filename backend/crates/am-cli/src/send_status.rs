//! Per-widget send indicator: spinner while sending, then a success or
//! error icon that reverts to idle after a delay.

use crate::{WebhookResult, WorkflowCard, cards};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum SendStatus {
    Idle,
    Sending,
    Success,
    Failed(String),
}

/// Proof that a send was started; ties `finish`/`reset_after` to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendTicket(u64);

#[derive(Debug)]
struct IndicatorState {
    status: SendStatus,
    generation: u64,
}

/// Cloneable handle; clones share state.
#[derive(Debug, Clone)]
pub struct SendIndicator {
    state: Arc<Mutex<IndicatorState>>,
}

impl Default for SendIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl SendIndicator {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(IndicatorState {
                status: SendStatus::Idle,
                generation: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, IndicatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn status(&self) -> SendStatus {
        self.lock().status.clone()
    }

    pub fn is_sending(&self) -> bool {
        self.lock().status == SendStatus::Sending
    }

    /// Start a send. Returns None while another send is outstanding.
    pub fn begin(&self) -> Option<SendTicket> {
        let mut state = self.lock();
        if state.status == SendStatus::Sending {
            return None;
        }

        state.generation += 1;
        state.status = SendStatus::Sending;
        Some(SendTicket(state.generation))
    }

    /// Record the outcome of the send started with `ticket`.
    pub fn finish(&self, ticket: SendTicket, result: &WebhookResult) {
        let mut state = self.lock();
        if state.generation != ticket.0 {
            return;
        }

        state.status = match result {
            WebhookResult::Success { .. } => SendStatus::Success,
            WebhookResult::Failure { error } => SendStatus::Failed(error.clone()),
        };
    }

    /// Wait `delay`, then revert to idle unless a newer send has started.
    pub async fn reset_after(&self, ticket: SendTicket, delay: Duration) {
        tokio::time::sleep(delay).await;

        let mut state = self.lock();
        if state.generation == ticket.0 && state.status != SendStatus::Sending {
            state.status = SendStatus::Idle;
        }
    }
}

/// One indicator per catalog card, shared by every send on that card.
#[derive(Debug, Clone)]
pub struct SendIndicators {
    by_slug: HashMap<&'static str, SendIndicator>,
}

impl Default for SendIndicators {
    fn default() -> Self {
        Self::new()
    }
}

impl SendIndicators {
    pub fn new() -> Self {
        Self {
            by_slug: cards()
                .iter()
                .map(|card| (card.slug, SendIndicator::new()))
                .collect(),
        }
    }

    /// Indicator of `card`; cards outside the catalog get a detached one.
    pub fn for_card(&self, card: &WorkflowCard) -> SendIndicator {
        self.by_slug.get(card.slug).cloned().unwrap_or_default()
    }
}
