//! Domain layer: ideas, saved-idea records, filters, and the
//! classification vocabulary.

pub mod filter;
pub mod idea;
pub mod idea_id;
pub mod taxonomy;

pub use filter::FilterOptions;
pub use idea::{ExpansionFlags, ExpansionKind, Idea, IdeaExpansion, SavedIdea};
pub use idea_id::IdeaId;
pub use taxonomy::{Industry, RevenueModel, TechStack};
