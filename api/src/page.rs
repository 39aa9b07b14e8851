//! HTML rendering for the questionnaire page
//!
//! The page is built server side from the core catalog and engine so the
//! browser never carries its own copy of the rule table.

use std::fmt::Write as _;

use referee_core::catalog::alternatives;
use referee_core::comparison::{self, TABLE_TITLE};
use referee_core::requirement::Choice;
use referee_core::{decide, Answer, DatasetSize, Hardware, ModelKind, Priority, UserRequirement};

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 0; background: #f4f6fb; color: #1f2933; }
header { background: #1e3a8a; color: white; padding: 1.5em 2em; }
header p { margin: 0.3em 0 0; opacity: 0.85; }
main { max-width: 960px; margin: 0 auto; padding: 1.5em; }
.card { background: white; border-radius: 8px; padding: 1.5em; margin: 1em 0; box-shadow: 0 2px 4px rgba(0,0,0,0.08); }
fieldset { border: none; margin: 0 0 1em; padding: 0; }
legend { font-weight: 600; margin-bottom: 0.4em; }
label { display: block; padding: 0.2em 0; }
button { background: #2563eb; color: white; border: none; border-radius: 6px; padding: 0.6em 1.4em; font-size: 1em; cursor: pointer; }
.recommendation h2 { margin-top: 0; color: #15803d; }
.caveats { background: #fef3c7; border-left: 4px solid #d97706; padding: 0.6em 1em; }
.columns { display: flex; gap: 2em; flex-wrap: wrap; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.5em; border-bottom: 1px solid #e5e7eb; }
th.chosen, td.chosen { background: #dcfce7; font-weight: 600; }
"#;

/// Render the full page, with a recommendation when `requirement` is set
pub fn render_page(requirement: Option<&UserRequirement>) -> String {
    let current = requirement.copied().unwrap_or_default();
    let chosen = requirement.map(decide);

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>ML Model Referee</title>
<style>{STYLE}</style>
</head>
<body>
<header>
<h1>ML Model Referee</h1>
<p>Choose the right model for your fake news detection project</p>
</header>
<main>
<form class="card" method="get" action="/">
"#
    );

    render_question::<DatasetSize>(
        &mut html,
        "1. How much training data do you have?",
        current.dataset_size,
    );
    render_question::<Priority>(&mut html, "2. What's most important to you?", current.priority);
    render_question::<Hardware>(&mut html, "3. What hardware do you have?", current.hardware);

    html.push_str("<button type=\"submit\">Get Recommendation</button>\n</form>\n");

    if let (Some(requirement), Some(recommendation)) = (requirement, chosen.as_ref()) {
        let profile = recommendation.profile();
        let _ = write!(
            html,
            r#"<section class="card recommendation" id="recommendation">
<h2>Recommendation: {model}</h2>
<p class="reason">Reason: {reason}</p>
<p class="requirements">Dataset size: {size} &middot; Priority: {priority} &middot; Hardware: {hardware}</p>
"#,
            model = escape_html(recommendation.model.display_name()),
            reason = escape_html(recommendation.reason),
            size = requirement.dataset_size,
            priority = requirement.priority,
            hardware = requirement.hardware.as_str().to_uppercase(),
        );

        if !recommendation.caveats.is_empty() {
            html.push_str("<div class=\"caveats\"><strong>Important Notes</strong><ul>\n");
            for caveat in &recommendation.caveats {
                let _ = writeln!(html, "<li>{}</li>", escape_html(caveat.message()));
            }
            html.push_str("</ul></div>\n");
        }

        let _ = write!(
            html,
            r#"<ul class="details">
<li>Accuracy: {}%</li>
<li>Speed: {}ms per prediction</li>
<li>Training: {} minutes</li>
<li>Memory: {}MB</li>
<li>Interpretability: {}/10</li>
<li>Hardware: {} required</li>
</ul>
<div class="columns">
"#,
            profile.accuracy,
            profile.speed_ms,
            profile.training_time_min,
            profile.memory_mb,
            profile.interpretability,
            profile.required_hardware,
        );
        render_list(&mut html, "strengths", "Strengths", profile.strengths);
        render_list(&mut html, "weaknesses", "Weaknesses", profile.weaknesses);
        html.push_str("</div>\n<h3>Alternative Options</h3>\n<ul class=\"alternatives\">\n");
        for alternative in alternatives(recommendation.model) {
            let _ = writeln!(
                html,
                "<li>{}: {}% accuracy, {}ms speed</li>",
                escape_html(alternative.kind.display_name()),
                alternative.accuracy,
                alternative.speed_ms
            );
        }
        html.push_str("</ul>\n</section>\n");
    }

    render_comparison(&mut html, chosen.as_ref().map(|r| r.model));

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_question<T: Answer + PartialEq>(html: &mut String, title: &str, selected: T) {
    let _ = writeln!(html, "<fieldset>\n<legend>{}</legend>", escape_html(title));
    for Choice { label, value, .. } in T::choices() {
        let checked = if *value == selected { " checked" } else { "" };
        let _ = writeln!(
            html,
            r#"<label><input type="radio" name="{field}" value="{value}"{checked}> {label}</label>"#,
            field = T::FIELD,
            value = value,
            label = escape_html(label),
        );
    }
    html.push_str("</fieldset>\n");
}

fn render_list(html: &mut String, class: &str, title: &str, items: &[&str]) {
    let _ = writeln!(html, "<div class=\"{class}\">\n<h3>{title}</h3>\n<ul>");
    for item in items {
        let _ = writeln!(html, "<li>{}</li>", escape_html(item));
    }
    html.push_str("</ul>\n</div>\n");
}

fn render_comparison(html: &mut String, chosen: Option<ModelKind>) {
    let column_class = |kind: ModelKind| {
        if Some(kind) == chosen {
            " class=\"chosen\""
        } else {
            ""
        }
    };

    let _ = write!(
        html,
        "<section class=\"card\" id=\"comparison\">\n<h2>{}</h2>\n<table>\n<thead><tr><th>Criteria</th>",
        escape_html(TABLE_TITLE)
    );
    for (kind, header) in ModelKind::ALL.iter().zip(comparison::headers()) {
        let _ = write!(html, "<th{}>{}</th>", column_class(*kind), escape_html(header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in comparison::rows() {
        let _ = write!(html, "<tr><td>{}</td>", escape_html(row.label));
        for (kind, cell) in ModelKind::ALL.iter().zip(&row.cells) {
            let _ = write!(html, "<td{}>{}</td>", column_class(*kind), escape_html(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</section>\n");
}

/// Minimal escaping for text placed in element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
