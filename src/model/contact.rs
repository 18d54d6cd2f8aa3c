use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::record::{default_visible, Record};

/// A person on the contacts screen who can receive campaigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Id<Contact>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default = "default_visible", skip_serializing)]
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl Record for Contact {
    type Draft = ContactDraft;

    fn from_draft(id: Id<Self>, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company: draft.company,
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
        let mut fields = vec![self.email.as_str()];
        fields.extend(self.phone.as_deref());
        fields.extend(self.company.as_deref());
        fields
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
