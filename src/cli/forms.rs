use crate::api::Resource;
use crate::error::MktResult;
use crate::model::{Campaign, CampaignDraft, Channel, Contact, ContactDraft};
use crate::ops::{campaign_ops, contact_ops};

/// Terminal form and detail rendering for a record type.
pub trait Form: Resource {
    /// Collects a draft, taking the name from `args` if given. `None` means
    /// the user backed out.
    fn read_draft(
        args: &str,
        prompt: &mut dyn FnMut(&str) -> Option<String>,
    ) -> Option<MktResult<Self::Draft>>;

    /// Label/value lines shown under an expanded row.
    fn details(&self) -> Vec<(&'static str, String)>;

    /// Records for the offline demo.
    fn demo_drafts() -> Vec<Self::Draft>;
}

fn name_from(args: &str, prompt: &mut dyn FnMut(&str) -> Option<String>) -> Option<String> {
    if !args.is_empty() {
        return Some(args.to_string());
    }
    match prompt("Name (required): ") {
        Some(s) if !s.is_empty() => Some(s),
        _ => {
            println!("Name is required.");
            None
        }
    }
}

impl Form for Campaign {
    fn read_draft(
        args: &str,
        prompt: &mut dyn FnMut(&str) -> Option<String>,
    ) -> Option<MktResult<CampaignDraft>> {
        let name = name_from(args, prompt)?;
        let subject = prompt("Subject: ")?;
        let description = prompt("Description: ")?;
        let channel = prompt("Channel (Email/SMS/Push, Enter for Email): ")?;
        Some(campaign_ops::draft_campaign(
            &name,
            Some(&subject),
            Some(&description),
            Some(&channel),
        ))
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![("Channel", self.channel.display_name().to_string())];
        if let Some(subject) = &self.subject {
            lines.push(("Subject", subject.clone()));
        }
        if let Some(description) = &self.description {
            lines.push(("Description", description.clone()));
        }
        lines
    }

    fn demo_drafts() -> Vec<CampaignDraft> {
        [
            ("Winter Sale", Some("Up to 40% off outerwear"), Channel::Email),
            ("Spring Launch", Some("Meet the new collection"), Channel::Email),
            ("Flash Friday", None, Channel::Sms),
            ("Welcome Series", Some("Thanks for joining"), Channel::Email),
            ("Cart Reminder", None, Channel::Push),
            ("Loyalty Points", Some("You have points waiting"), Channel::Email),
            ("Holiday Greetings", None, Channel::Sms),
        ]
        .into_iter()
        .map(|(name, subject, channel)| CampaignDraft {
            name: name.to_string(),
            subject: subject.map(str::to_string),
            description: None,
            channel,
        })
        .collect()
    }
}

impl Form for Contact {
    fn read_draft(
        args: &str,
        prompt: &mut dyn FnMut(&str) -> Option<String>,
    ) -> Option<MktResult<ContactDraft>> {
        let name = name_from(args, prompt)?;
        let email = prompt("Email (required): ")?;
        let phone = prompt("Phone: ")?;
        let company = prompt("Company: ")?;
        Some(contact_ops::draft_contact(
            &name,
            &email,
            Some(&phone),
            Some(&company),
        ))
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![("Email", self.email.clone())];
        if let Some(phone) = &self.phone {
            lines.push(("Phone", phone.clone()));
        }
        if let Some(company) = &self.company {
            lines.push(("Company", company.clone()));
        }
        lines
    }

    fn demo_drafts() -> Vec<ContactDraft> {
        [
            ("Ana Lima", "ana@northwind.example", Some("Northwind")),
            ("Ben Okafor", "ben@contoso.example", Some("Contoso")),
            ("Chloe Martin", "chloe@example.com", None),
            ("Dev Patel", "dev@fabrikam.example", Some("Fabrikam")),
            ("Eva Novak", "eva@example.com", None),
            ("Farid Haddad", "farid@northwind.example", Some("Northwind")),
        ]
        .into_iter()
        .map(|(name, email, company)| ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            company: company.map(str::to_string),
        })
        .collect()
    }
}
