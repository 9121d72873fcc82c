//! HTML result page generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use typequiz_core::report::QuizReport;
use typequiz_core::scoring::AxisBreakdown;

use crate::markdown::share_text;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a quiz report.
pub fn generate_html(report: &QuizReport) -> String {
    let desc = &report.description;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} — {}</title>\n",
        report.type_code,
        html_escape(&desc.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} | {}/{} questions answered | {}</p>\n",
        html_escape(&report.quiz_name),
        report.answered,
        report.total_questions,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str(&format!(
        "<h1 class=\"type-code\">{}</h1>\n<h2 class=\"type-name\">{}</h2>\n",
        report.type_code,
        html_escape(&desc.name)
    ));
    if !desc.keywords.is_empty() {
        html.push_str("<div class=\"keywords\">");
        for keyword in &desc.keywords {
            html.push_str(&format!("<span class=\"keyword\">{}</span>", html_escape(keyword)));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</header>\n");

    // Dimension chart
    html.push_str("<section class=\"dimensions\">\n");
    html.push_str("<h2>Dimensions</h2>\n");
    html.push_str(&generate_axis_chart(&report.axes));
    html.push_str("</section>\n");

    // Description
    if !desc.description.is_empty() {
        html.push_str("<section class=\"description\">\n<h2>About this type</h2>\n");
        html.push_str(&format!("<p>{}</p>\n", html_escape(&desc.description)));
        html.push_str("</section>\n");
    }

    push_list(&mut html, "Strengths", "strengths", &desc.strengths);
    push_list(&mut html, "Weaknesses", "weaknesses", &desc.weaknesses);

    if !desc.career.is_empty() {
        html.push_str("<section class=\"career\">\n<h2>Career suggestions</h2>\n<div>");
        for career in &desc.career {
            html.push_str(&format!(
                "<span class=\"career-item\">{}</span>",
                html_escape(career)
            ));
        }
        html.push_str("</div>\n</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str(&format!(
        "<footer><p class=\"share\">{}</p></footer>\n",
        html_escape(&share_text(report))
    ));

    html.push_str("</body>\n</html>");
    html
}

fn push_list(html: &mut String, title: &str, class: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    html.push_str(&format!(
        "<section class=\"{class}\">\n<h2>{title}</h2>\n<ul>\n"
    ));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul>\n</section>\n");
}

/// Write an HTML page to a file.
pub fn write_html_report(report: &QuizReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

/// One horizontal bar per axis, filled to the left letter's share.
fn generate_axis_chart(axes: &[AxisBreakdown]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 40;

    let total_height = axes.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width * 2 + max_width + 100,
        total_height
    );

    for (i, axis) in axes.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (axis.left_percent / 100.0 * max_width as f64).round() as usize;
        let mid = y + bar_height / 2;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"16\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            mid,
            axis.left
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#e5e7eb\" rx=\"4\"/>\n",
            label_width, y, max_width, bar_height
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#6366f1\" rx=\"4\"/>\n",
            label_width, y, width, bar_height
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"16\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + max_width + 10,
            mid,
            axis.right
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{} : {}</text>\n",
            label_width + max_width + 35,
            mid,
            axis.left_count,
            axis.right_count
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --accent: #6366f1; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --accent: #818cf8; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 48rem; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.type-code { font-size: 4rem; letter-spacing: 0.3rem; color: var(--accent); margin-bottom: 0; }
.type-name { margin-top: 0.5rem; }
.keyword, .career-item { display: inline-block; border: 1px solid var(--border); border-radius: 999px; padding: 0.25rem 0.75rem; margin: 0.25rem; }
ul { padding-left: 1.5rem; }
li { margin: 0.25rem 0; }
.share { color: #6b7280; font-style: italic; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_report;

    #[test]
    fn html_report_contains_required_elements() {
        let report = sample_report();
        let html = generate_html(&report);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("INTJ"));
        assert!(html.contains("Architect"));
        assert!(html.contains("<li>Strategic</li>"));
        assert!(html.contains("career-item"));
        assert!(html.contains("<svg"));
        assert!(html.contains("1 : 3"));
        assert!(html.contains("Raw JSON Data"));
    }

    #[test]
    fn html_escapes_content() {
        let mut report = sample_report();
        report.description.name = "<script>alert('x')</script>".into();
        let html = generate_html(&report);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
