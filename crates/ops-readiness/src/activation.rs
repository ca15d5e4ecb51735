use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTACT_NAME: &str = "Operations Lead";
pub const DEFAULT_COMPANY_NAME: &str = "Your Company";
pub const DEFAULT_BUSINESS_TYPE: &str = "Retail / Distribution";
pub const DEFAULT_COUNTRY: &str = "your market";

/// Personalization captured when a profile is activated.
///
/// Missing fields deserialize to the portal defaults; blank strings can be
/// replaced with [`ActivationContext::or_defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationContext {
    pub contact_name: String,
    pub company_name: String,
    pub business_type: String,
    pub country: String,
}

impl Default for ActivationContext {
    fn default() -> Self {
        Self {
            contact_name: DEFAULT_CONTACT_NAME.to_string(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            business_type: DEFAULT_BUSINESS_TYPE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl ActivationContext {
    pub fn new(
        contact_name: impl Into<String>,
        company_name: impl Into<String>,
        business_type: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            contact_name: contact_name.into(),
            company_name: company_name.into(),
            business_type: business_type.into(),
            country: country.into(),
        }
    }

    /// Replace blank fields with the portal defaults.
    pub fn or_defaults(self) -> Self {
        let defaults = Self::default();
        Self {
            contact_name: non_blank(self.contact_name, defaults.contact_name),
            company_name: non_blank(self.company_name, defaults.company_name),
            business_type: non_blank(self.business_type, defaults.business_type),
            country: non_blank(self.country, defaults.country),
        }
    }

    /// Field values in the order they are matched for highlighting.
    pub fn terms(&self) -> [&str; 4] {
        [
            self.contact_name.as_str(),
            self.company_name.as_str(),
            self.business_type.as_str(),
            self.country.as_str(),
        ]
    }
}

fn non_blank(value: String, fallback: String) -> String {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
