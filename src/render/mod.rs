//! Server-side artifacts: the Farcaster frame document, its SVG preview
//! image, and the small HTML pages the frame buttons link to.
//!
//! Everything here is a pure function of an idea and the public base
//! URL.

pub mod frame;
pub mod image;
pub mod links;
pub mod pages;
pub mod text;

pub use frame::render_frame_document;
pub use image::render_frame_image;
pub use links::PublicUrls;
pub use pages::{render_idea_page, render_landing_page, render_not_found_page};
