//! Data Transfer Objects for REST request/response serialization.
//!
//! Domain types ([`crate::domain::Idea`], [`crate::domain::SavedIdea`],
//! [`crate::domain::FilterOptions`]) already carry the camelCase wire
//! shape and are used directly; this module only holds the envelopes
//! around them.

pub mod idea_dto;

pub use idea_dto::*;
