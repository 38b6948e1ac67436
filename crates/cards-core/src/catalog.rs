//! Plan and Feature Catalogue
//!
//! Marketing copy shown on the landing page. The server uses the same
//! `Plan` pricing when it builds Stripe line items.

use serde::{Deserialize, Serialize};

/// Subscription plan tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Basic,
    Pro,
}

/// Billing interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingInterval {
    Monthly,
    Yearly,
}

impl BillingInterval {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

/// Pricing information
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanPricing {
    pub name: &'static str,
    pub description: &'static str,
    pub cents: i64,
    pub interval: BillingInterval,
}

impl PlanPricing {
    /// e.g. `$10 / month`
    pub fn price_label(&self) -> String {
        let dollars = self.cents / 100;
        let rest = self.cents % 100;
        if rest == 0 {
            format!("${} / {}", dollars, self.interval.label())
        } else {
            format!("${}.{:02} / {}", dollars, rest, self.interval.label())
        }
    }
}

impl Plan {
    pub const ALL: [Self; 2] = [Self::Basic, Self::Pro];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
        }
    }

    /// Get pricing for this plan
    pub const fn pricing(self) -> PlanPricing {
        match self {
            Self::Basic => PlanPricing {
                name: "Basic",
                description: "Access to basic flashcard features and limited storage.",
                cents: 500,
                interval: BillingInterval::Monthly,
            },
            Self::Pro => PlanPricing {
                name: "Pro",
                description: "Unlimited flashcards and storage, with priority support.",
                cents: 1000,
                interval: BillingInterval::Monthly,
            },
        }
    }

    /// Button caption on the pricing card
    pub fn call_to_action(self) -> String {
        format!("Choose {}", self.pricing().name)
    }
}

/// A marketing feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Easy Text Input",
        body: "Simply input your text and let our software do the rest. \
               Creating flashcards has never been easier.",
    },
    Feature {
        title: "Smart Flashcards",
        body: "Our AI intelligently breaks down your text into concise flashcards, \
               perfect for studying.",
    },
    Feature {
        title: "Accessible Anywhere",
        body: "Access your flashcards from any device, at any time. \
               Study on the go with ease.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_pricing() {
        assert_eq!(Plan::Basic.pricing().cents, 500);
        assert_eq!(Plan::Pro.pricing().cents, 1000);
        assert_eq!(Plan::Pro.pricing().interval, BillingInterval::Monthly);
    }

    #[test]
    fn test_price_label() {
        assert_eq!(Plan::Basic.pricing().price_label(), "$5 / month");
        assert_eq!(Plan::Pro.pricing().price_label(), "$10 / month");

        let odd = PlanPricing {
            cents: 1299,
            interval: BillingInterval::Yearly,
            ..Plan::Pro.pricing()
        };
        assert_eq!(odd.price_label(), "$12.99 / year");
    }

    #[test]
    fn test_call_to_action() {
        assert_eq!(Plan::Pro.call_to_action(), "Choose Pro");
        assert_eq!(Plan::Basic.call_to_action(), "Choose Basic");
    }

    #[test]
    fn test_feature_copy_is_joined() {
        assert!(FEATURES[0].body.contains("rest. Creating"));
        assert_eq!(FEATURES.len(), 3);
    }
}
