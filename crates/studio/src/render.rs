//! HTML fragments for studio results
//!
//! Anything the writer typed is escaped before it reaches markup.

use crate::analyzer::Analysis;
use crate::hooks::HookScore;
use crate::store::Script;
use crate::templates::Format;

pub fn escape_html(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
    .replace('\'', "&#39;")
}

pub fn ideas_html(format: Format, niche: &str, ideas: &[String]) -> String {
  let mut html = format!(
    "<section class=\"ideas\">\n<h3>{} ideas for {}</h3>\n<ol>\n",
    escape_html(format.name()),
    escape_html(niche)
  );
  for idea in ideas {
    html.push_str(&format!("<li>{}</li>\n", escape_html(idea)));
  }
  html.push_str("</ol>\n</section>\n");
  html
}

/// CSS class for a 0..=10 score
pub fn score_class(score: u8) -> &'static str {
  match score {
    8..=10 => "score-high",
    6..=7 => "score-mid",
    _ => "score-low",
  }
}

pub fn hook_score_html(result: &HookScore) -> String {
  format!(
    "<div class=\"hook-score {}\">\n<span class=\"score\">{}/10</span>\n<p>{}</p>\n</div>\n",
    score_class(result.score),
    result.score,
    escape_html(&result.feedback)
  )
}

pub fn analysis_html(analysis: &Analysis) -> String {
  let mut html = String::from("<section class=\"analysis\">\n<dl>\n");
  html.push_str(&format!(
    "<dt>Hook strength</dt><dd class=\"{}\">{}/10</dd>\n",
    score_class(analysis.hook_strength),
    analysis.hook_strength
  ));
  html.push_str(&format!("<dt>Estimated duration</dt><dd>{}s</dd>\n", analysis.estimated_duration));
  html.push_str(&format!("<dt>Word count</dt><dd>{}</dd>\n", analysis.word_count));
  html.push_str(&format!(
    "<dt>Call-to-action</dt><dd>{}</dd>\n",
    if analysis.has_cta { "Yes" } else { "No" }
  ));
  html.push_str("</dl>\n<ul class=\"tips\">\n");
  for tip in &analysis.tips {
    html.push_str(&format!("<li>{}</li>\n", escape_html(tip)));
  }
  html.push_str("</ul>\n</section>\n");
  html
}

pub fn scripts_html(scripts: &[Script]) -> String {
  if scripts.is_empty() {
    return "<p class=\"empty\">No saved scripts yet.</p>\n".to_string();
  }

  let mut html = String::from("<ul class=\"saved-scripts\">\n");
  for script in scripts {
    html.push_str(&format!(
      "<li data-id=\"{}\">\n<strong>{}</strong>\n<p>{}</p>\n<em>{}</em>\n<time>{}</time>\n</li>\n",
      script.id,
      escape_html(&script.hook),
      escape_html(&script.body),
      escape_html(&script.cta),
      escape_html(&script.timestamp)
    ));
  }
  html.push_str("</ul>\n");
  html
}
