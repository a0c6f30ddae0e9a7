//! Outbound links to the booking partner.

use wayfarer_catalog::prelude::*;

/// Default partner URL template. `{code}` is replaced with the product code.
pub const DEFAULT_LINK_TEMPLATE: &str = "https://www.tourvista.com/tours/{code}";

/// Default affiliate campaign tag appended to every outbound link.
pub const DEFAULT_CAMPAIGN: &str = "wayfarer-web";

/// Affiliate link builder for the booking partner.
///
/// The catalog core treats URL construction as a black box behind
/// [`BookingLinker`]; this is the one concrete implementation the site uses.
#[derive(Debug, Clone)]
pub struct PartnerLinks {
    template: String,
    campaign: String,
}

impl PartnerLinks {
    /// Create a link builder with an explicit template and campaign tag,
    /// usually sourced from `wayfarer.toml`.
    pub fn new(template: impl Into<String>, campaign: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            campaign: campaign.into(),
        }
    }
}

impl Default for PartnerLinks {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_TEMPLATE, DEFAULT_CAMPAIGN)
    }
}

impl BookingLinker for PartnerLinks {
    fn booking_url(&self, code: &ProductCode) -> String {
        let base = self.template.replace("{code}", code.as_str());
        if self.campaign.is_empty() {
            base
        } else {
            format!("{}?cmp={}", base, self.campaign)
        }
    }
}
