//! Markdown rendering and share text.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use typequiz_core::report::QuizReport;

/// One-line summary suitable for pasting into a chat or social post.
pub fn share_text(report: &QuizReport) -> String {
    format!(
        "I completed the {}, my personality type is {} - {}! Take the quiz and find yours.",
        report.quiz_name, report.type_code, report.description.name
    )
}

/// Render a report as Markdown.
pub fn to_markdown(report: &QuizReport) -> String {
    let desc = &report.description;
    let mut md = String::new();

    let _ = writeln!(md, "# {} — {}\n", report.type_code, desc.name);
    if !desc.keywords.is_empty() {
        let tags: Vec<String> = desc.keywords.iter().map(|k| format!("`{k}`")).collect();
        let _ = writeln!(md, "{}\n", tags.join(" "));
    }
    if !desc.description.is_empty() {
        let _ = writeln!(md, "{}\n", desc.description);
    }

    md.push_str("## Dimensions\n\n");
    md.push_str("| Axis | Left | Right | Score | Split |\n");
    md.push_str("|------|------|-------|-------|-------|\n");
    for axis in &report.axes {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} : {} | {:.0}% / {:.0}% |",
            axis.axis,
            axis.left,
            axis.right,
            axis.left_count,
            axis.right_count,
            axis.left_percent,
            axis.right_percent
        );
    }
    md.push('\n');

    push_section(&mut md, "Strengths", &desc.strengths);
    push_section(&mut md, "Weaknesses", &desc.weaknesses);
    push_section(&mut md, "Career suggestions", &desc.career);

    let _ = writeln!(
        md,
        "_{} of {} questions answered · {}_",
        report.answered,
        report.total_questions,
        report.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    md
}

fn push_section(md: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(md, "## {title}\n");
    for item in items {
        let _ = writeln!(md, "- {item}");
    }
    md.push('\n');
}

/// Write a Markdown rendering to a file.
pub fn write_markdown_report(report: &QuizReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_markdown(report))?;
    Ok(())
}
