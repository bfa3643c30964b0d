//! Farcaster frame document (`fc:frame` vNext meta tags).

use super::PublicUrls;
use super::text::escape_markup;
use crate::domain::Idea;

/// Renders the HTML document that social clients unfurl into a frame.
///
/// The frame shows the preview image and three link buttons: view the
/// idea, generate a new one (application root), and save the idea.
#[must_use]
pub fn render_frame_document(idea: &Idea, urls: &PublicUrls) -> String {
    let id = idea.idea_id.as_str();
    let image = escape_markup(&urls.frame_image(id));
    let view = escape_markup(&urls.idea_page(id));
    let regenerate = escape_markup(&urls.root());
    let save = escape_markup(&urls.save(id));
    let description = escape_markup(idea.headline());
    let raw_text = escape_markup(&idea.raw_idea_text);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta property="fc:frame" content="vNext" />
  <meta property="fc:frame:image" content="{image}" />
  <meta property="fc:frame:button:1" content="💡 View Idea" />
  <meta property="fc:frame:button:1:action" content="link" />
  <meta property="fc:frame:button:1:target" content="{view}" />
  <meta property="fc:frame:button:2" content="🔄 Generate New" />
  <meta property="fc:frame:button:2:action" content="link" />
  <meta property="fc:frame:button:2:target" content="{regenerate}" />
  <meta property="fc:frame:button:3" content="❤️ Save Idea" />
  <meta property="fc:frame:button:3:action" content="link" />
  <meta property="fc:frame:button:3:target" content="{save}" />
  <meta property="og:title" content="IdeaSpark - Startup Idea" />
  <meta property="og:description" content="{description}" />
  <meta property="og:image" content="{image}" />
</head>
<body>
  <div style="display: none;">
    IdeaSpark Frame for: {raw_text}
  </div>
</body>
</html>"#
    )
}
