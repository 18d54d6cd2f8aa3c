use crate::error::{MktError, MktResult};
use crate::model::{CampaignDraft, Channel};
use crate::validation::{self, trim_optional};

/// Builds a campaign draft from raw form input.
pub fn draft_campaign(
    name: &str,
    subject: Option<&str>,
    description: Option<&str>,
    channel: Option<&str>,
) -> MktResult<CampaignDraft> {
    let valid_name = validation::non_blank(name, "name")?;
    let channel = match trim_optional(channel) {
        None => Channel::default(),
        Some(raw) => Channel::parse(&raw).ok_or_else(|| MktError::InvalidField {
            field: "channel".into(),
            reason: format!("'{}' is not one of Email, SMS, Push", raw),
        })?,
    };

    Ok(CampaignDraft {
        name: valid_name,
        subject: trim_optional(subject),
        description: trim_optional(description),
        channel,
    })
}
