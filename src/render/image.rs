//! 1200x630 SVG preview image for a shared idea.

use super::text::{escape_markup, fold_lines, truncate_chars};
use crate::domain::Idea;

/// Character budget for the title line.
pub const TITLE_BUDGET: usize = 60;

/// Character budget for the description line.
pub const DESCRIPTION_BUDGET: usize = 120;

/// Renders the preview image: header, title, description, up to two tag
/// badges (industry, tech stack), and a fixed footer.
#[must_use]
pub fn render_frame_image(idea: &Idea) -> String {
    let title = escape_markup(&truncate_chars(&fold_lines(idea.headline()), TITLE_BUDGET));
    let description = escape_markup(&truncate_chars(
        &fold_lines(idea.summary()),
        DESCRIPTION_BUDGET,
    ));
    let industry_badge = idea
        .industry
        .as_deref()
        .map(|tag| badge(60, tag))
        .unwrap_or_default();
    let tech_badge = idea
        .tech_stack
        .as_deref()
        .map(|tag| badge(200, tag))
        .unwrap_or_default();

    format!(
        r##"<svg width="1200" height="630" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#f8fafc;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#e2e8f0;stop-opacity:1" />
    </linearGradient>
    <linearGradient id="accent" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#22c55e;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#16a34a;stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="1200" height="630" fill="url(#bg)"/>
  <rect x="0" y="0" width="1200" height="100" fill="url(#accent)"/>
  <text x="60" y="65" font-family="Arial, sans-serif" font-size="32" font-weight="bold" fill="white">🚀 IdeaSpark</text>
  <text x="60" y="180" font-family="Arial, sans-serif" font-size="28" font-weight="bold" fill="#1e293b">{title}</text>
  <text x="60" y="230" font-family="Arial, sans-serif" font-size="18" fill="#64748b">{description}</text>
{industry_badge}{tech_badge}  <text x="60" y="580" font-family="Arial, sans-serif" font-size="16" fill="#64748b">Shake your phone for your next big startup idea! 📱</text>
  <text x="60" y="605" font-family="Arial, sans-serif" font-size="14" fill="#94a3b8">Powered by AI • Built on Base</text>
</svg>"##
    )
}

fn badge(x: u32, tag: &str) -> String {
    let label = escape_markup(tag);
    let center = x + 60;
    format!(
        r##"  <rect x="{x}" y="300" width="120" height="30" rx="15" fill="#f1f5f9" stroke="#cbd5e1"/>
  <text x="{center}" y="320" font-family="Arial, sans-serif" font-size="14" fill="#475569" text-anchor="middle">{label}</text>
"##
    )
}
