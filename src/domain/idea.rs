//! Ideas, their AI expansions, and saved-idea records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FilterOptions, IdeaId};

/// A generated startup idea.
///
/// Created by the generation client with only `raw_idea_text` (and the
/// tags of the filters it was generated under) populated. The derived
/// fields are filled in later by merging an [`IdeaExpansion`].
///
/// Serialized in camelCase so that records written by the web client
/// remain readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Unique idea identifier.
    pub idea_id: IdeaId,
    /// Text as returned by the language model (or a fallback sample).
    pub raw_idea_text: String,
    /// Catchy pitch, under twenty words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_liner: Option<String>,
    /// Paragraph describing problem, audience, and features.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Industry tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Tech stack tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    /// Revenue model tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_model: Option<String>,
    /// Short market analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_summary: Option<String>,
    /// Practical validation steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_tips: Option<String>,
    /// Generation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Idea {
    /// Creates an idea with a fresh id and only the raw text populated.
    #[must_use]
    pub fn new(raw_idea_text: impl Into<String>) -> Self {
        Self {
            idea_id: IdeaId::new(),
            raw_idea_text: raw_idea_text.into(),
            one_liner: None,
            description: None,
            industry: None,
            tech_stack: None,
            revenue_model: None,
            market_summary: None,
            validation_tips: None,
            created_at: Utc::now(),
        }
    }

    /// Copies the filter values onto the idea's classification tags.
    #[must_use]
    pub fn tagged_with(mut self, filters: &FilterOptions) -> Self {
        self.industry = filters.industry.map(|v| v.as_str().to_string());
        self.tech_stack = filters.tech_stack.map(|v| v.as_str().to_string());
        self.revenue_model = filters.revenue_model.map(|v| v.as_str().to_string());
        self
    }

    /// Overwrites the derived fields that `expansion` provides; fields the
    /// expansion leaves `None` are kept.
    pub fn merge_expansion(&mut self, expansion: IdeaExpansion) {
        let IdeaExpansion {
            one_liner,
            description,
            market_summary,
            validation_tips,
        } = expansion;
        if one_liner.is_some() {
            self.one_liner = one_liner;
        }
        if description.is_some() {
            self.description = description;
        }
        if market_summary.is_some() {
            self.market_summary = market_summary;
        }
        if validation_tips.is_some() {
            self.validation_tips = validation_tips;
        }
    }

    /// The one-liner when present, otherwise the raw text.
    #[must_use]
    pub fn headline(&self) -> &str {
        self.one_liner.as_deref().unwrap_or(&self.raw_idea_text)
    }

    /// The description when present, otherwise the raw text.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.raw_idea_text)
    }
}

/// The kinds of AI elaboration that can be attached to an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionKind {
    /// Catchy one-line pitch.
    OneLiner,
    /// Detailed paragraph.
    Description,
    /// Market size, competition, opportunities.
    MarketSummary,
    /// Steps for validating the idea.
    ValidationTips,
}

/// Which expansions to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionFlags {
    /// Request a one-liner.
    #[serde(default)]
    pub one_liner: bool,
    /// Request a description.
    #[serde(default)]
    pub description: bool,
    /// Request a market summary.
    #[serde(default)]
    pub market_summary: bool,
    /// Request validation tips.
    #[serde(default)]
    pub validation_tips: bool,
}

impl ExpansionFlags {
    /// Requests every kind.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            one_liner: true,
            description: true,
            market_summary: true,
            validation_tips: true,
        }
    }

    /// Requests exactly the kinds `idea` does not have yet.
    #[must_use]
    pub const fn missing_from(idea: &Idea) -> Self {
        Self {
            one_liner: idea.one_liner.is_none(),
            description: idea.description.is_none(),
            market_summary: idea.market_summary.is_none(),
            validation_tips: idea.validation_tips.is_none(),
        }
    }

    /// Returns `true` if `kind` is requested.
    #[must_use]
    pub const fn wants(&self, kind: ExpansionKind) -> bool {
        match kind {
            ExpansionKind::OneLiner => self.one_liner,
            ExpansionKind::Description => self.description,
            ExpansionKind::MarketSummary => self.market_summary,
            ExpansionKind::ValidationTips => self.validation_tips,
        }
    }

    /// Returns `true` if nothing is requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.one_liner || self.description || self.market_summary || self.validation_tips)
    }
}

/// Result of an expansion request. Kinds that were not requested are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdeaExpansion {
    /// Generated one-liner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_liner: Option<String>,
    /// Generated description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Generated market summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_summary: Option<String>,
    /// Generated validation tips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_tips: Option<String>,
}

impl IdeaExpansion {
    /// Stores `text` in the slot for `kind`.
    pub fn set(&mut self, kind: ExpansionKind, text: String) {
        let slot = match kind {
            ExpansionKind::OneLiner => &mut self.one_liner,
            ExpansionKind::Description => &mut self.description,
            ExpansionKind::MarketSummary => &mut self.market_summary,
            ExpansionKind::ValidationTips => &mut self.validation_tips,
        };
        *slot = Some(text);
    }
}

/// A user's bookmark of an idea.
///
/// At most one record exists per idea id; the save id is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedIdea {
    /// Save record identifier (`saved_<ideaId>`).
    pub saved_idea_id: String,
    /// Owning user.
    pub user_id: String,
    /// The saved idea's identifier.
    pub idea_id: IdeaId,
    /// When the idea was saved.
    pub saved_at: DateTime<Utc>,
    /// Snapshot of the idea at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idea: Option<Idea>,
}

impl SavedIdea {
    /// Creates a save record for `idea` owned by `user_id`, stamped now.
    #[must_use]
    pub fn new(idea: &Idea, user_id: &str) -> Self {
        Self {
            saved_idea_id: format!("saved_{}", idea.idea_id),
            user_id: user_id.to_string(),
            idea_id: idea.idea_id.clone(),
            saved_at: Utc::now(),
            idea: Some(idea.clone()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::{Industry, RevenueModel};

    #[test]
    fn new_idea_has_only_raw_text() {
        let idea = Idea::new("parking space marketplace");
        assert_eq!(idea.raw_idea_text, "parking space marketplace");
        assert!(idea.one_liner.is_none());
        assert!(idea.description.is_none());
        assert!(idea.industry.is_none());
        assert_eq!(ExpansionFlags::missing_from(&idea), ExpansionFlags::all());
    }

    #[test]
    fn tagged_with_copies_filters() {
        let filters = FilterOptions {
            industry: Some(Industry::Fintech),
            tech_stack: None,
            revenue_model: Some(RevenueModel::TransactionFee),
        };
        let idea = Idea::new("x").tagged_with(&filters);
        assert_eq!(idea.industry.as_deref(), Some("fintech"));
        assert_eq!(idea.tech_stack, None);
        assert_eq!(idea.revenue_model.as_deref(), Some("transaction-fee"));
    }

    #[test]
    fn merge_keeps_fields_the_expansion_omits() {
        let mut idea = Idea::new("x");
        idea.one_liner = Some("existing".to_string());

        let mut expansion = IdeaExpansion::default();
        expansion.set(ExpansionKind::Description, "desc".to_string());
        idea.merge_expansion(expansion);

        assert_eq!(idea.one_liner.as_deref(), Some("existing"));
        assert_eq!(idea.description.as_deref(), Some("desc"));
        assert!(idea.market_summary.is_none());

        let flags = ExpansionFlags::missing_from(&idea);
        assert!(!flags.wants(ExpansionKind::OneLiner));
        assert!(!flags.wants(ExpansionKind::Description));
        assert!(flags.wants(ExpansionKind::MarketSummary));
        assert!(flags.wants(ExpansionKind::ValidationTips));
    }

    #[test]
    fn headline_prefers_one_liner() {
        let mut idea = Idea::new("raw");
        assert_eq!(idea.headline(), "raw");
        assert_eq!(idea.summary(), "raw");
        idea.one_liner = Some("pitch".to_string());
        idea.description = Some("long".to_string());
        assert_eq!(idea.headline(), "pitch");
        assert_eq!(idea.summary(), "long");
    }

    #[test]
    fn reads_web_client_records() {
        let json = r#"{
            "ideaId": "lq8x0z1abc",
            "rawIdeaText": "Tool sharing for neighbours",
            "industry": "social",
            "createdAt": "2024-05-01T10:00:00.000Z"
        }"#;
        let Ok(idea) = serde_json::from_str::<Idea>(json) else {
            panic!("should parse web client record");
        };
        assert_eq!(idea.idea_id.as_str(), "lq8x0z1abc");
        assert_eq!(idea.industry.as_deref(), Some("social"));
    }

    #[test]
    fn saved_idea_id_is_derived() {
        let idea = Idea::new("x");
        let saved = SavedIdea::new(&idea, "current_user");
        assert_eq!(saved.saved_idea_id, format!("saved_{}", idea.idea_id));
        assert_eq!(saved.idea_id, idea.idea_id);
        assert_eq!(saved.user_id, "current_user");
    }

    #[test]
    fn empty_flags() {
        assert!(ExpansionFlags::default().is_empty());
        assert!(!ExpansionFlags::all().is_empty());
    }
}
