//! Minimal HTML pages served at the frame's link targets.

use super::PublicUrls;
use super::text::escape_markup;
use crate::domain::Idea;
use crate::domain::taxonomy::{industry_emoji, revenue_model_emoji, tech_stack_emoji};
use crate::domain::{Industry, RevenueModel, TechStack};

const STYLE: &str = "body{font-family:Arial,sans-serif;max-width:480px;margin:0 auto;padding:24px;color:#1e293b;background:#f8fafc}\
.card{background:#fff;border:1px solid #e2e8f0;border-radius:12px;padding:20px}\
.tag{display:inline-block;background:#f1f5f9;border:1px solid #cbd5e1;border-radius:15px;padding:4px 10px;margin:0 6px 6px 0;font-size:14px;color:#475569}\
.notice{background:#f0fdf4;border:1px solid #bbf7d0;color:#166534;border-radius:8px;padding:12px;margin-bottom:16px}\
a.button{display:inline-block;margin-top:16px;background:#22c55e;color:#fff;padding:10px 16px;border-radius:8px;text-decoration:none}";

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape_markup(title),
    )
}

fn section(heading: &str, text: Option<&str>) -> String {
    text.map(|t| {
        format!(
            "    <h3>{}</h3>\n    <p>{}</p>\n",
            escape_markup(heading),
            escape_markup(t)
        )
    })
    .unwrap_or_default()
}

fn badge(emoji: &str, label: &str) -> String {
    format!("<span class=\"tag\">{emoji} {}</span>", escape_markup(label))
}

/// Detail page for a shared idea (the frame's "View Idea" target).
///
/// Known tags are shown with their display label; anything else verbatim.
#[must_use]
pub fn render_idea_page(idea: &Idea, urls: &PublicUrls) -> String {
    let mut tags = String::new();
    if let Some(tag) = idea.industry.as_deref() {
        let label = tag.parse::<Industry>().map_or(tag, |v| v.label());
        tags.push_str(&badge(industry_emoji(tag), label));
    }
    if let Some(tag) = idea.tech_stack.as_deref() {
        let label = tag.parse::<TechStack>().map_or(tag, |v| v.label());
        tags.push_str(&badge(tech_stack_emoji(tag), label));
    }
    if let Some(tag) = idea.revenue_model.as_deref() {
        let label = tag.parse::<RevenueModel>().map_or(tag, |v| v.label());
        tags.push_str(&badge(revenue_model_emoji(tag), label));
    }

    let mut body = String::from("  <div class=\"card\">\n");
    body.push_str(&format!("    <div>{tags}</div>\n"));
    body.push_str(&format!("    <h1>{}</h1>\n", escape_markup(idea.headline())));
    if idea.one_liner.is_some() {
        body.push_str(&format!(
            "    <p>{}</p>\n",
            escape_markup(&idea.raw_idea_text)
        ));
    }
    body.push_str(&section("Description", idea.description.as_deref()));
    body.push_str(&section("Market Analysis", idea.market_summary.as_deref()));
    body.push_str(&section("Validation Tips", idea.validation_tips.as_deref()));
    body.push_str(&format!(
        "    <p><small>Generated {}</small></p>\n",
        idea.created_at.format("%b %-d, %Y")
    ));
    body.push_str(&format!(
        "    <a class=\"button\" href=\"{}\">❤️ Save Idea</a>\n",
        escape_markup(&urls.save(idea.idea_id.as_str()))
    ));
    body.push_str(&format!(
        "    <a class=\"button\" href=\"{}\">🔄 Generate New</a>\n",
        escape_markup(&urls.root())
    ));
    body.push_str("  </div>");
    page(&format!("IdeaSpark - {}", idea.headline()), &body)
}

/// Page shown when a shared idea is missing or expired.
#[must_use]
pub fn render_not_found_page(urls: &PublicUrls) -> String {
    let body = format!(
        "  <div class=\"card\">\n    <h1>❌ Idea not found or has expired</h1>\n    <p>This idea may have expired or doesn't exist.</p>\n    <a class=\"button\" href=\"{}\">Generate a new idea</a>\n  </div>",
        escape_markup(&urls.root())
    );
    page("IdeaSpark - Not found", &body)
}

/// Application landing page, optionally showing a notification passed via
/// the `message` query parameter.
#[must_use]
pub fn render_landing_page(notice: Option<&str>) -> String {
    let notice = notice
        .filter(|m| !m.trim().is_empty())
        .map(|m| format!("  <div class=\"notice\">{}</div>\n", escape_markup(m)))
        .unwrap_or_default();
    let body = format!(
        "{notice}  <div class=\"card\">\n    <h1>✨ IdeaSpark</h1>\n    <p>Shake your phone for your next big startup idea.</p>\n    <p>Get AI-powered startup ideas instantly. Shake to generate, swipe to save, and share with your network.</p>\n  </div>"
    );
    page("IdeaSpark", &body)
}
