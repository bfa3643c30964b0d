//! Filter predicate over idea classification tags.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::Idea;
use super::taxonomy::{Industry, RevenueModel, TechStack};

/// Optional industry / tech stack / revenue model selector.
///
/// A pure query predicate: every provided field must match, absent fields
/// match everything. Empty strings in query strings or stored preferences
/// are treated as absent, matching how the web client clears a dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FilterOptions {
    /// Required industry tag.
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub industry: Option<Industry>,
    /// Required tech stack tag.
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub tech_stack: Option<TechStack>,
    /// Required revenue model tag.
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub revenue_model: Option<RevenueModel>,
}

impl FilterOptions {
    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.industry.is_none() && self.tech_stack.is_none() && self.revenue_model.is_none()
    }

    /// Returns `true` if `idea` carries every tag this filter requires.
    #[must_use]
    pub fn matches(&self, idea: &Idea) -> bool {
        tag_matches(self.industry.map(Industry::as_str), idea.industry.as_deref())
            && tag_matches(
                self.tech_stack.map(TechStack::as_str),
                idea.tech_stack.as_deref(),
            )
            && tag_matches(
                self.revenue_model.map(RevenueModel::as_str),
                idea.revenue_model.as_deref(),
            )
    }
}

fn tag_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    wanted.is_none_or(|w| actual == Some(w))
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn idea(industry: Option<&str>, tech: Option<&str>, revenue: Option<&str>) -> Idea {
        let mut idea = Idea::new("test idea");
        idea.industry = industry.map(str::to_string);
        idea.tech_stack = tech.map(str::to_string);
        idea.revenue_model = revenue.map(str::to_string);
        idea
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = FilterOptions::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&idea(None, None, None)));
        assert!(filter.matches(&idea(Some("gaming"), Some("web"), None)));
    }

    #[test]
    fn every_combination_requires_all_fields() {
        let candidates = [
            idea(Some("fintech"), Some("mobile"), Some("subscription")),
            idea(Some("fintech"), Some("web"), Some("subscription")),
            idea(Some("edtech"), Some("mobile"), Some("freemium")),
            idea(None, Some("mobile"), None),
        ];
        let industries = [None, Some(Industry::Fintech), Some(Industry::Edtech)];
        let stacks = [None, Some(TechStack::Mobile), Some(TechStack::Web)];
        let models = [
            None,
            Some(RevenueModel::Subscription),
            Some(RevenueModel::Freemium),
        ];

        for industry in industries {
            for tech_stack in stacks {
                for revenue_model in models {
                    let filter = FilterOptions {
                        industry,
                        tech_stack,
                        revenue_model,
                    };
                    for candidate in &candidates {
                        let expected = industry
                            .is_none_or(|i| candidate.industry.as_deref() == Some(i.as_str()))
                            && tech_stack.is_none_or(|t| {
                                candidate.tech_stack.as_deref() == Some(t.as_str())
                            })
                            && revenue_model.is_none_or(|r| {
                                candidate.revenue_model.as_deref() == Some(r.as_str())
                            });
                        assert_eq!(filter.matches(candidate), expected, "{filter:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn blank_strings_deserialize_as_absent() {
        let json = r#"{"industry":"","techStack":"ai","revenueModel":null}"#;
        let Ok(filter) = serde_json::from_str::<FilterOptions>(json) else {
            panic!("should parse");
        };
        assert_eq!(filter.industry, None);
        assert_eq!(filter.tech_stack, Some(TechStack::Ai));
        assert_eq!(filter.revenue_model, None);
    }

    #[test]
    fn unknown_values_are_rejected() {
        let json = r#"{"industry":"biotech"}"#;
        assert!(serde_json::from_str::<FilterOptions>(json).is_err());
    }

    #[test]
    fn serializes_only_present_fields() {
        let filter = FilterOptions {
            industry: None,
            tech_stack: Some(TechStack::NoCode),
            revenue_model: None,
        };
        let json = serde_json::to_string(&filter).unwrap_or_default();
        assert_eq!(json, r#"{"techStack":"no-code"}"#);
    }
}
