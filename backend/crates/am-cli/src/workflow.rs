//! The workflow assistants shown as cards on the portal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine identifier the automation side routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowType {
    Email,
    #[serde(rename = "JET_test")]
    JetTest,
    #[serde(rename = "Revisor_chat")]
    RevisorChat,
    Economics,
    #[serde(rename = "Idé_kasse")]
    IdeaBox,
}

impl WorkflowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::JetTest => "JET_test",
            Self::RevisorChat => "Revisor_chat",
            Self::Economics => "Economics",
            Self::IdeaBox => "Idé_kasse",
        }
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCard {
    /// Route segment, e.g. `economics` in `/workflow/economics`
    pub slug: &'static str,
    /// Human-readable label, sent as `cardName`
    pub title: &'static str,
    pub description: &'static str,
    pub workflow_type: WorkflowType,
}

const CATALOG: [WorkflowCard; 5] = [
    WorkflowCard {
        slug: "email",
        title: "Email Assistent",
        description: "Automatiseret emailbehandling og administrationsworkflows",
        workflow_type: WorkflowType::Email,
    },
    WorkflowCard {
        slug: "test",
        title: "JET Test Assistent",
        description: "Automatiserede testworkflows og kvalitetssikringsprocesser",
        workflow_type: WorkflowType::JetTest,
    },
    WorkflowCard {
        slug: "manual",
        title: "Revisor-håndbog Assistent",
        description: "Manuel gennemgangs- og håndbogsstyringsworkflows",
        workflow_type: WorkflowType::RevisorChat,
    },
    WorkflowCard {
        slug: "economics",
        title: "Economic Assistent",
        description: "Hent udtræk fra Economic med denne agent",
        workflow_type: WorkflowType::Economics,
    },
    WorkflowCard {
        slug: "idea",
        title: "Idé kassen",
        description: "Har du en idé til en nyt workflow eller feedback på et eksisterende? Lad mig endelig høre!",
        workflow_type: WorkflowType::IdeaBox,
    },
];

/// All cards in display order.
pub fn cards() -> &'static [WorkflowCard] {
    &CATALOG
}

/// Card for a route slug. Unknown slugs have no page.
pub fn find_card(slug: &str) -> Option<&'static WorkflowCard> {
    CATALOG.iter().find(|card| card.slug == slug)
}

/// Card for a workflow type; every type has exactly one.
pub fn card_for(workflow_type: WorkflowType) -> &'static WorkflowCard {
    match workflow_type {
        WorkflowType::Email => &CATALOG[0],
        WorkflowType::JetTest => &CATALOG[1],
        WorkflowType::RevisorChat => &CATALOG[2],
        WorkflowType::Economics => &CATALOG[3],
        WorkflowType::IdeaBox => &CATALOG[4],
    }
}
