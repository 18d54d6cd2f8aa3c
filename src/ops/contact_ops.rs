use crate::error::MktResult;
use crate::model::ContactDraft;
use crate::validation::{self, trim_optional};

/// Builds a contact draft from raw form input.
pub fn draft_contact(
    name: &str,
    email: &str,
    phone: Option<&str>,
    company: Option<&str>,
) -> MktResult<ContactDraft> {
    Ok(ContactDraft {
        name: validation::non_blank(name, "name")?,
        email: validation::email(email, "email")?,
        phone: trim_optional(phone),
        company: trim_optional(company),
    })
}
