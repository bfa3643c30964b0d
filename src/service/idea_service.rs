//! Idea generation and expansion over a [`CompletionProvider`].
//!
//! Remote failures never reach the caller: generation falls back to a
//! random sample idea and every expansion kind has a static fallback
//! text. Failures are logged at `warn`.

use std::sync::Arc;

use rand::Rng;

use crate::completion::{CompletionProvider, CompletionRequest};
use crate::domain::{ExpansionFlags, ExpansionKind, FilterOptions, Idea, IdeaExpansion};

/// Ideas served when the provider is unreachable.
pub const SAMPLE_IDEAS: [&str; 10] = [
    "A platform that connects local farmers with restaurants for same-day fresh produce delivery",
    "An AI-powered personal finance coach that analyzes spending patterns and suggests micro-investments",
    "A social learning app where users teach each other skills through short video tutorials",
    "A marketplace for renting out unused parking spaces in urban areas",
    "An app that gamifies household chores for families with reward systems",
    "A platform for booking last-minute fitness classes at discounted rates",
    "A service that turns old smartphones into home security cameras",
    "An AI tool that helps small businesses write better product descriptions",
    "A community platform for organizing neighborhood tool and equipment sharing",
    "A subscription service for personalized meal kits based on dietary restrictions and local ingredients",
];

const GENERATOR_SYSTEM_PROMPT: &str = "You are a creative startup idea generator. Generate unique, practical, and innovative startup ideas that solve real problems.";

/// Per-kind prompt and sampling parameters.
struct ExpansionSpec {
    system: &'static str,
    max_tokens: u32,
    temperature: f32,
    fallback: &'static str,
}

const fn expansion_spec(kind: ExpansionKind) -> ExpansionSpec {
    match kind {
        ExpansionKind::OneLiner => ExpansionSpec {
            system: "Create a compelling one-liner pitch for this startup idea. Make it catchy and memorable, under 20 words.",
            max_tokens: 50,
            temperature: 0.7,
            fallback: "Innovative solution for modern problems.",
        },
        ExpansionKind::Description => ExpansionSpec {
            system: "Write a detailed paragraph describing this startup idea, including the problem it solves, target audience, and key features.",
            max_tokens: 200,
            temperature: 0.7,
            fallback: "This startup addresses a significant market need through technology and user-centric design, providing value to customers while building a sustainable business model.",
        },
        ExpansionKind::MarketSummary => ExpansionSpec {
            system: "Provide a brief market analysis for this startup idea, including market size, competition, and opportunities.",
            max_tokens: 150,
            temperature: 0.6,
            fallback: "Growing market with significant opportunities for disruption and innovation. Competition exists but there's room for differentiation.",
        },
        ExpansionKind::ValidationTips => ExpansionSpec {
            system: "Provide 3-4 practical tips for validating this startup idea, including specific actions the entrepreneur can take.",
            max_tokens: 150,
            temperature: 0.6,
            fallback: "1. Conduct customer interviews 2. Build an MVP 3. Test with early adopters 4. Gather and iterate on feedback",
        },
    }
}

/// Static text substituted when expanding `kind` fails.
#[must_use]
pub const fn fallback_expansion(kind: ExpansionKind) -> &'static str {
    expansion_spec(kind).fallback
}

/// Builds the user prompt for idea generation under `filters`.
#[must_use]
pub fn build_generation_prompt(filters: &FilterOptions) -> String {
    let mut prompt = String::from("Generate a unique startup idea that solves a real problem.");
    if let Some(industry) = filters.industry {
        prompt.push_str(&format!(" Focus on the {industry} industry."));
    }
    if let Some(tech_stack) = filters.tech_stack {
        prompt.push_str(&format!(" Use {tech_stack} technology."));
    }
    if let Some(revenue_model) = filters.revenue_model {
        prompt.push_str(&format!(" Consider a {revenue_model} revenue model."));
    }
    prompt.push_str(" Keep it concise and practical.");
    prompt
}

/// Picks one of [`SAMPLE_IDEAS`] uniformly at random.
#[must_use]
pub fn random_sample_idea() -> &'static str {
    let index = rand::rng().random_range(0..SAMPLE_IDEAS.len());
    SAMPLE_IDEAS.get(index).copied().unwrap_or_default()
}

/// Idea generation client.
#[derive(Debug, Clone)]
pub struct IdeaService {
    provider: Arc<dyn CompletionProvider>,
}

impl IdeaService {
    /// Creates a service on top of `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generates a new idea constrained by `filters`.
    ///
    /// The returned idea has a fresh id, the generated (or sample) text,
    /// and the filter values as its tags.
    pub async fn generate(&self, filters: &FilterOptions) -> Idea {
        let request = CompletionRequest::new(
            GENERATOR_SYSTEM_PROMPT,
            build_generation_prompt(filters),
            150,
            0.9,
        );
        let text = match self.provider.complete(request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "idea generation failed, using sample idea");
                random_sample_idea().to_string()
            }
        };
        let idea = Idea::new(text).tagged_with(filters);
        tracing::info!(idea_id = %idea.idea_id, "idea generated");
        idea
    }

    /// Produces the requested expansions of `idea_text`.
    ///
    /// Requests for the different kinds run concurrently and fail
    /// independently; each failed kind gets its fallback text.
    pub async fn expand(&self, idea_text: &str, flags: ExpansionFlags) -> IdeaExpansion {
        let (one_liner, description, market_summary, validation_tips) = tokio::join!(
            self.expand_kind(idea_text, ExpansionKind::OneLiner, flags),
            self.expand_kind(idea_text, ExpansionKind::Description, flags),
            self.expand_kind(idea_text, ExpansionKind::MarketSummary, flags),
            self.expand_kind(idea_text, ExpansionKind::ValidationTips, flags),
        );
        IdeaExpansion {
            one_liner,
            description,
            market_summary,
            validation_tips,
        }
    }

    /// Expands whatever `idea` is still missing and merges it in.
    pub async fn expand_idea(&self, idea: &Idea) -> Idea {
        let flags = ExpansionFlags::missing_from(idea);
        let mut expanded = idea.clone();
        if flags.is_empty() {
            return expanded;
        }
        expanded.merge_expansion(self.expand(&idea.raw_idea_text, flags).await);
        tracing::info!(idea_id = %idea.idea_id, ?flags, "idea expanded");
        expanded
    }

    async fn expand_kind(
        &self,
        idea_text: &str,
        kind: ExpansionKind,
        flags: ExpansionFlags,
    ) -> Option<String> {
        if !flags.wants(kind) {
            return None;
        }
        let spec = expansion_spec(kind);
        let request = CompletionRequest::new(
            spec.system,
            format!("Startup idea: {idea_text}"),
            spec.max_tokens,
            spec.temperature,
        );
        match self.provider.complete(request).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(error = %e, ?kind, "expansion failed, using fallback");
                Some(spec.fallback.to_string())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::completion::OfflineProvider;
    use crate::completion::testing::ScriptedProvider;
    use crate::domain::{Industry, RevenueModel, TechStack};

    fn service(provider: ScriptedProvider) -> (IdeaService, Arc<ScriptedProvider>) {
        let provider = Arc::new(provider);
        (
            IdeaService::new(Arc::clone(&provider) as Arc<dyn CompletionProvider>),
            provider,
        )
    }

    #[test]
    fn prompt_without_filters() {
        assert_eq!(
            build_generation_prompt(&FilterOptions::default()),
            "Generate a unique startup idea that solves a real problem. Keep it concise and practical."
        );
    }

    #[test]
    fn prompt_embeds_every_filter() {
        let filters = FilterOptions {
            industry: Some(Industry::Healthtech),
            tech_stack: Some(TechStack::ArVr),
            revenue_model: Some(RevenueModel::Subscription),
        };
        let prompt = build_generation_prompt(&filters);
        assert!(prompt.contains(" Focus on the healthtech industry."));
        assert!(prompt.contains(" Use ar-vr technology."));
        assert!(prompt.contains(" Consider a subscription revenue model."));
        assert!(prompt.ends_with(" Keep it concise and practical."));
    }

    #[tokio::test]
    async fn generate_uses_provider_text_and_tags() {
        let (service, provider) = service(
            ScriptedProvider::new().reply("startup idea generator", "Drone-delivered coffee"),
        );
        let filters = FilterOptions {
            industry: Some(Industry::Ecommerce),
            ..FilterOptions::default()
        };
        let idea = service.generate(&filters).await;

        assert_eq!(idea.raw_idea_text, "Drone-delivered coffee");
        assert_eq!(idea.industry.as_deref(), Some("ecommerce"));
        assert!(idea.one_liner.is_none());

        let recorded = provider.recorded();
        let Some(request) = recorded.first() else {
            panic!("no request recorded");
        };
        assert_eq!(request.max_tokens, 150);
        assert!(request.user_prompt().unwrap_or_default().contains("ecommerce"));
    }

    #[tokio::test]
    async fn generate_falls_back_to_sample() {
        let service = IdeaService::new(Arc::new(OfflineProvider));
        let filters = FilterOptions {
            tech_stack: Some(TechStack::Iot),
            ..FilterOptions::default()
        };
        let idea = service.generate(&filters).await;
        assert!(SAMPLE_IDEAS.contains(&idea.raw_idea_text.as_str()));
        assert_eq!(idea.tech_stack.as_deref(), Some("iot"));
    }

    #[tokio::test]
    async fn generated_ids_are_unique() {
        let service = IdeaService::new(Arc::new(OfflineProvider));
        let a = service.generate(&FilterOptions::default()).await;
        let b = service.generate(&FilterOptions::default()).await;
        assert_ne!(a.idea_id, b.idea_id);
    }

    #[tokio::test]
    async fn expand_requests_only_flagged_kinds() {
        let (service, provider) = service(
            ScriptedProvider::new()
                .reply("one-liner", "Fresh food, fast.")
                .reply("market analysis", "Huge market."),
        );
        let flags = ExpansionFlags {
            one_liner: true,
            market_summary: true,
            ..ExpansionFlags::default()
        };
        let expansion = service.expand("farm to table", flags).await;

        assert_eq!(expansion.one_liner.as_deref(), Some("Fresh food, fast."));
        assert_eq!(expansion.market_summary.as_deref(), Some("Huge market."));
        assert!(expansion.description.is_none());
        assert!(expansion.validation_tips.is_none());
        assert_eq!(provider.request_count(), 2);
        assert!(provider
            .recorded()
            .iter()
            .all(|r| r.user_prompt() == Some("Startup idea: farm to table")));
    }

    #[tokio::test]
    async fn partial_failure_only_affects_failed_kind() {
        let (service, _) = service(
            ScriptedProvider::new()
                .reply("one-liner", "Pitch")
                .fail("detailed paragraph")
                .reply("market analysis", "Market")
                .reply("validating", "Tips"),
        );
        let expansion = service.expand("x", ExpansionFlags::all()).await;

        assert_eq!(expansion.one_liner.as_deref(), Some("Pitch"));
        assert_eq!(
            expansion.description.as_deref(),
            Some(fallback_expansion(ExpansionKind::Description))
        );
        assert_eq!(expansion.market_summary.as_deref(), Some("Market"));
        assert_eq!(expansion.validation_tips.as_deref(), Some("Tips"));
    }

    #[tokio::test]
    async fn expand_idea_fills_only_missing_fields() {
        let (service, provider) = service(
            ScriptedProvider::new()
                .reply("detailed paragraph", "Desc")
                .reply("market analysis", "Market")
                .reply("validating", "Tips"),
        );
        let mut idea = Idea::new("x");
        idea.one_liner = Some("Kept".to_string());

        let expanded = service.expand_idea(&idea).await;
        assert_eq!(expanded.one_liner.as_deref(), Some("Kept"));
        assert_eq!(expanded.description.as_deref(), Some("Desc"));
        assert_eq!(expanded.idea_id, idea.idea_id);
        assert_eq!(provider.request_count(), 3);

        let again = service.expand_idea(&expanded).await;
        assert_eq!(again, expanded);
        assert_eq!(provider.request_count(), 3);
    }

    #[test]
    fn random_sample_is_from_list() {
        for _ in 0..50 {
            assert!(SAMPLE_IDEAS.contains(&random_sample_idea()));
        }
    }
}
