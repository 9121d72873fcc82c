//! The `typequiz render` command.

use std::path::PathBuf;

use anyhow::Result;

use typequiz_core::report::QuizReport;
use typequiz_report::html::{generate_html, write_html_report};
use typequiz_report::markdown::{share_text, to_markdown, write_markdown_report};

pub fn execute(report_path: PathBuf, format: String, output: Option<PathBuf>) -> Result<()> {
    let report = QuizReport::load_json(&report_path)?;
    let stem = format!("result-{}", report.created_at.format("%Y-%m-%dT%H%M%S"));

    match (format.as_str(), output) {
        ("html", Some(dir)) => {
            let path = dir.join(format!("{stem}.html"));
            write_html_report(&report, &path)?;
            println!("HTML result: {}", path.display());
        }
        ("markdown" | "md", Some(dir)) => {
            let path = dir.join(format!("{stem}.md"));
            write_markdown_report(&report, &path)?;
            println!("Markdown result: {}", path.display());
        }
        ("html", None) => print!("{}", generate_html(&report)),
        ("markdown" | "md", None) => print!("{}", to_markdown(&report)),
        ("text", _) => {
            println!(
                "{} — {} ({} of {} questions answered)",
                report.type_code,
                report.description.name,
                report.answered,
                report.total_questions
            );
            for axis in &report.axes {
                println!(
                    "  {}  {} {} : {} {}",
                    axis.axis, axis.left, axis.left_count, axis.right_count, axis.right
                );
            }
            println!("{}", share_text(&report));
        }
        (other, _) => anyhow::bail!("unknown format: {other} (expected text, html, or markdown)"),
    }

    Ok(())
}
