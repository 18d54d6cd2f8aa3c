use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::record::{default_visible, Record};

/// Where a campaign is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Channel {
    #[default]
    Email,
    Sms,
    Push,
}

impl Channel {
    pub const ALL: &'static [Channel] = &[Channel::Email, Channel::Sms, Channel::Push];

    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Sms => "SMS",
            Channel::Push => "Push",
        }
    }

    /// Parse from user input, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        Channel::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(s.trim()))
    }
}

/// A marketing campaign as listed on the campaigns screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Id<Campaign>,
    pub name: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub channel: Channel,
    #[serde(default = "default_visible", skip_serializing)]
    pub visible: bool,
}

/// Form input for a new campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub name: String,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub channel: Channel,
}

impl CampaignDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: None,
            description: None,
            channel: Channel::default(),
        }
    }
}

impl Record for Campaign {
    type Draft = CampaignDraft;

    fn from_draft(id: Id<Self>, draft: CampaignDraft) -> Self {
        Self {
            id,
            name: draft.name,
            subject: draft.subject,
            description: draft.description,
            channel: draft.channel,
            visible: true,
        }
    }

    fn id(&self) -> Id<Self> {
        self.id
    }

    fn set_id(&mut self, id: Id<Self>) {
        self.id = id;
    }

    fn primary_label(&self) -> &str {
        &self.name
    }

    fn set_primary_label(&mut self, label: String) {
        self.name = label;
    }

    fn searchable_fields(&self) -> Vec<&str> {
        [self.subject.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
