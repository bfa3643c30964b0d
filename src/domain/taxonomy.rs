//! Classification vocabulary for ideas: industries, tech stacks, and
//! revenue models.
//!
//! Ideas carry their tags as free strings (whatever the filters were at
//! generation time). These enums are the closed vocabulary used to
//! validate filter input and to render labels and badges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error returned when a tag string is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownTag {
    /// Which vocabulary was consulted (`"industry"`, ...).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Target industry of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    /// Financial technology.
    Fintech,
    /// Health technology.
    Healthtech,
    /// Education technology.
    Edtech,
    /// Online retail.
    Ecommerce,
    /// Software as a service.
    Saas,
    /// Social networking.
    Social,
    /// Games.
    Gaming,
    /// AI and machine learning.
    Ai,
    /// Blockchain and web3.
    Blockchain,
    /// Climate and sustainability.
    Sustainability,
}

impl Industry {
    /// Every industry, in display order.
    pub const ALL: [Self; 10] = [
        Self::Fintech,
        Self::Healthtech,
        Self::Edtech,
        Self::Ecommerce,
        Self::Saas,
        Self::Social,
        Self::Gaming,
        Self::Ai,
        Self::Blockchain,
        Self::Sustainability,
    ];

    /// Wire value, e.g. `"fintech"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fintech => "fintech",
            Self::Healthtech => "healthtech",
            Self::Edtech => "edtech",
            Self::Ecommerce => "ecommerce",
            Self::Saas => "saas",
            Self::Social => "social",
            Self::Gaming => "gaming",
            Self::Ai => "ai",
            Self::Blockchain => "blockchain",
            Self::Sustainability => "sustainability",
        }
    }

    /// Human-readable label, e.g. `"FinTech"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fintech => "FinTech",
            Self::Healthtech => "HealthTech",
            Self::Edtech => "EdTech",
            Self::Ecommerce => "E-commerce",
            Self::Saas => "SaaS",
            Self::Social => "Social",
            Self::Gaming => "Gaming",
            Self::Ai => "AI/ML",
            Self::Blockchain => "Blockchain",
            Self::Sustainability => "Sustainability",
        }
    }

    /// Badge emoji.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Fintech => "💰",
            Self::Healthtech => "🏥",
            Self::Edtech => "📚",
            Self::Ecommerce => "🛒",
            Self::Saas => "💻",
            Self::Social => "👥",
            Self::Gaming => "🎮",
            Self::Ai => "🤖",
            Self::Blockchain => "⛓️",
            Self::Sustainability => "🌱",
        }
    }
}

/// Primary technology an idea is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TechStack {
    /// Web application.
    Web,
    /// Native mobile app.
    Mobile,
    /// AI and machine learning.
    Ai,
    /// Blockchain.
    Blockchain,
    /// Internet of things.
    Iot,
    /// Augmented or virtual reality.
    ArVr,
    /// No-code tooling.
    NoCode,
    /// API or backend product.
    Api,
}

impl TechStack {
    /// Every tech stack, in display order.
    pub const ALL: [Self; 8] = [
        Self::Web,
        Self::Mobile,
        Self::Ai,
        Self::Blockchain,
        Self::Iot,
        Self::ArVr,
        Self::NoCode,
        Self::Api,
    ];

    /// Wire value, e.g. `"ar-vr"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Ai => "ai",
            Self::Blockchain => "blockchain",
            Self::Iot => "iot",
            Self::ArVr => "ar-vr",
            Self::NoCode => "no-code",
            Self::Api => "api",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Web => "Web App",
            Self::Mobile => "Mobile App",
            Self::Ai => "AI/ML",
            Self::Blockchain => "Blockchain",
            Self::Iot => "IoT",
            Self::ArVr => "AR/VR",
            Self::NoCode => "No-Code",
            Self::Api => "API/Backend",
        }
    }

    /// Badge emoji.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Web => "🌐",
            Self::Mobile => "📱",
            Self::Ai => "🤖",
            Self::Blockchain => "⛓️",
            Self::Iot => "📡",
            Self::ArVr => "🥽",
            Self::NoCode => "🔧",
            Self::Api => "🔌",
        }
    }
}

/// How an idea makes money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RevenueModel {
    /// Recurring subscription.
    Subscription,
    /// Free tier with paid upgrades.
    Freemium,
    /// Two-sided marketplace.
    Marketplace,
    /// Ad supported.
    Advertising,
    /// Per-transaction fee.
    TransactionFee,
    /// Single up-front purchase.
    OneTimePurchase,
    /// Licensing.
    Licensing,
}

impl RevenueModel {
    /// Every revenue model, in display order.
    pub const ALL: [Self; 7] = [
        Self::Subscription,
        Self::Freemium,
        Self::Marketplace,
        Self::Advertising,
        Self::TransactionFee,
        Self::OneTimePurchase,
        Self::Licensing,
    ];

    /// Wire value, e.g. `"transaction-fee"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subscription => "subscription",
            Self::Freemium => "freemium",
            Self::Marketplace => "marketplace",
            Self::Advertising => "advertising",
            Self::TransactionFee => "transaction-fee",
            Self::OneTimePurchase => "one-time-purchase",
            Self::Licensing => "licensing",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Subscription => "Subscription",
            Self::Freemium => "Freemium",
            Self::Marketplace => "Marketplace",
            Self::Advertising => "Advertising",
            Self::TransactionFee => "Transaction Fee",
            Self::OneTimePurchase => "One-time Purchase",
            Self::Licensing => "Licensing",
        }
    }

    /// Badge emoji.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Subscription => "🔄",
            Self::Freemium => "🆓",
            Self::Marketplace => "🏪",
            Self::Advertising => "📢",
            Self::TransactionFee => "💳",
            Self::OneTimePurchase => "💵",
            Self::Licensing => "📄",
        }
    }
}

impl FromStr for Industry {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownTag {
                kind: "industry",
                value: s.to_string(),
            })
    }
}

impl FromStr for TechStack {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownTag {
                kind: "tech stack",
                value: s.to_string(),
            })
    }
}

impl FromStr for RevenueModel {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownTag {
                kind: "revenue model",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RevenueModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge emoji for a free-form industry tag, with a generic fallback.
#[must_use]
pub fn industry_emoji(tag: &str) -> &'static str {
    tag.parse::<Industry>().map_or("💡", Industry::emoji)
}

/// Badge emoji for a free-form tech stack tag, with a generic fallback.
#[must_use]
pub fn tech_stack_emoji(tag: &str) -> &'static str {
    tag.parse::<TechStack>().map_or("⚡", TechStack::emoji)
}

/// Badge emoji for a free-form revenue model tag, with a generic fallback.
#[must_use]
pub fn revenue_model_emoji(tag: &str) -> &'static str {
    tag.parse::<RevenueModel>().map_or("💰", RevenueModel::emoji)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_serde() {
        for v in TechStack::ALL {
            let json = serde_json::to_string(&v).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
        }
        for v in RevenueModel::ALL {
            let json = serde_json::to_string(&v).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
        }
        for v in Industry::ALL {
            let json = serde_json::to_string(&v).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
        }
    }

    #[test]
    fn parse_round_trips_every_value() {
        for v in Industry::ALL {
            assert_eq!(v.as_str().parse::<Industry>(), Ok(v));
        }
        assert_eq!("ar-vr".parse::<TechStack>(), Ok(TechStack::ArVr));
        assert_eq!(
            "one-time-purchase".parse::<RevenueModel>(),
            Ok(RevenueModel::OneTimePurchase)
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        let Err(err) = "biotech".parse::<Industry>() else {
            panic!("expected rejection");
        };
        assert_eq!(err.to_string(), "unknown industry: biotech");
    }

    #[test]
    fn emoji_falls_back_for_unknown_tags() {
        assert_eq!(industry_emoji("fintech"), "💰");
        assert_eq!(industry_emoji("space"), "💡");
        assert_eq!(tech_stack_emoji("quantum"), "⚡");
        assert_eq!(revenue_model_emoji("barter"), "💰");
    }
}
