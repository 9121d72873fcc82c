//! The `typequiz take` command.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use typequiz_core::engine::{NextOutcome, QuizEngine, QuizOutcome, QuizState};
use typequiz_core::report::QuizReport;
use typequiz_core::source::{load_quiz, FileSource, QuizData};
use typequiz_report::html::write_html_report;
use typequiz_report::markdown::{share_text, write_markdown_report};

pub struct TakeArgs {
    pub questions: Option<PathBuf>,
    pub types: Option<PathBuf>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub no_delay: bool,
    pub config: Option<PathBuf>,
}

/// One line of user input while a question is showing.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// 1-based option number.
    Choose(usize),
    Next,
    Back,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" | "n" | "next" => Command::Next,
        "b" | "back" | "p" | "prev" => Command::Back,
        "q" | "quit" | "exit" => Command::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Choose(n),
            _ => Command::Unknown,
        },
    }
}

/// Where a finished result goes besides the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultFormat {
    Text,
    Json,
    Html,
    Markdown,
}

/// Parse `all` or a comma-separated format list.
fn parse_formats(format: &str) -> Result<Vec<ResultFormat>> {
    if format.trim() == "all" {
        return Ok(vec![
            ResultFormat::Json,
            ResultFormat::Html,
            ResultFormat::Markdown,
        ]);
    }
    format
        .split(',')
        .map(str::trim)
        .map(|fmt| match fmt {
            "text" => Ok(ResultFormat::Text),
            "json" => Ok(ResultFormat::Json),
            "html" => Ok(ResultFormat::Html),
            "markdown" | "md" => Ok(ResultFormat::Markdown),
            other => Err(anyhow::anyhow!(
                "unknown format: {other} (expected text, json, html, markdown, or all)"
            )),
        })
        .collect()
}

pub async fn execute(args: TakeArgs) -> Result<()> {
    let config = super::resolve_config(args.config, args.questions, args.types)?;
    let format = args.format.unwrap_or_else(|| config.default_format.clone());
    let formats = parse_formats(&format)?;
    let output = args.output.unwrap_or_else(|| config.output_dir.clone());
    let delay = if args.no_delay {
        Duration::ZERO
    } else {
        config.reveal_delay()
    };

    let source = FileSource::new(&config.questions_path, &config.types_path);
    let data = load_quiz(&source)
        .await
        .context("the quiz cannot start without its data; fix the files and run again")?;

    tracing::debug!(
        questions = data.questions.len(),
        types = data.catalog.len(),
        format = %format,
        "starting quiz"
    );

    let mut engine = data.engine()?;
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut out = std::io::stdout();

    writeln!(
        out,
        "{} — {} questions. Type an option number to answer, 'b' to go back, 'q' to quit.",
        data.questions.name,
        engine.total_questions()
    )?;

    loop {
        let Some(outcome) = run_session(&mut engine, &mut input, &mut out, delay).await? else {
            writeln!(out, "Quiz abandoned.")?;
            return Ok(());
        };

        present_result(&outcome, &data, &formats, &output, &mut out)?;

        write!(out, "\nTake the quiz again? [y/N] ")?;
        out.flush()?;
        let again = input.next_line().await?.unwrap_or_default();
        engine.restart();
        if !again.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

/// Drive one session from start to a scored outcome. `None` if the user quit.
async fn run_session<R, W>(
    engine: &mut QuizEngine,
    input: &mut Lines<R>,
    out: &mut W,
    delay: Duration,
) -> Result<Option<QuizOutcome>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    engine.start();
    let mut shown = None;

    loop {
        match engine.state() {
            QuizState::InProgress { index } => {
                if shown != Some(index) {
                    render_question(engine, out)?;
                    shown = Some(index);
                }
                write!(out, "> ")?;
                out.flush()?;

                let line = input
                    .next_line()
                    .await?
                    .context("input closed before the quiz was finished")?;

                match parse_command(&line) {
                    Command::Choose(n) => match engine.select_option(n - 1) {
                        Ok(_) => advance(engine, out)?,
                        Err(e) => writeln!(out, "{e}")?,
                    },
                    Command::Next => advance(engine, out)?,
                    Command::Back => {
                        if !engine.go_to_previous() {
                            writeln!(out, "Already at the first question.")?;
                        }
                    }
                    Command::Quit => return Ok(None),
                    Command::Unknown => {
                        writeln!(out, "Type an option number, 'b' to go back, or 'q' to quit.")?
                    }
                }
            }
            QuizState::Scoring => {
                writeln!(out, "\nComputing your result...")?;
                out.flush()?;
                tokio::time::sleep(delay).await;
                return Ok(Some(engine.finish()?));
            }
            state => anyhow::bail!("unexpected quiz state: {state}"),
        }
    }
}

fn advance<W: Write>(engine: &mut QuizEngine, out: &mut W) -> Result<()> {
    if engine.go_to_next() == NextOutcome::Blocked {
        writeln!(out, "Please choose an option first.")?;
    }
    Ok(())
}

fn render_question<W: Write>(engine: &QuizEngine, out: &mut W) -> Result<()> {
    let (Some(index), Some(question)) = (engine.current_index(), engine.current_question()) else {
        return Ok(());
    };
    let selected = engine.answer_for(&question.id);

    writeln!(out)?;
    writeln!(
        out,
        "[{}] Question {}/{}",
        progress_bar(engine.progress(), 20),
        index + 1,
        engine.total_questions()
    )?;
    writeln!(out, "{}", question.prompt)?;
    for (i, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(option.letter) {
            "*"
        } else {
            " "
        };
        writeln!(out, " {marker} {}. {}", i + 1, option.text)?;
    }
    Ok(())
}

fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

fn present_result<W: Write>(
    outcome: &QuizOutcome,
    data: &QuizData,
    formats: &[ResultFormat],
    output: &Path,
    out: &mut W,
) -> Result<()> {
    let report = match QuizReport::build(outcome, data) {
        Ok(report) => report,
        Err(e) => {
            writeln!(out, "\nYour personality type: {}", outcome.type_code)?;
            return Err(e).context("the result page cannot be shown");
        }
    };

    print_result(&report, out)?;
    save_outputs(&report, formats, output)
}

fn print_result<W: Write>(report: &QuizReport, out: &mut W) -> Result<()> {
    use comfy_table::{Cell, Table};

    let desc = &report.description;
    writeln!(out, "\nYour personality type: {} — {}", report.type_code, desc.name)?;
    if !desc.keywords.is_empty() {
        writeln!(out, "Keywords: {}", desc.keywords.join(", "))?;
    }
    if !desc.description.is_empty() {
        writeln!(out, "\n{}", desc.description)?;
    }

    let mut table = Table::new();
    table.set_header(vec!["Axis", "Left", "Score", "Right", "Split"]);
    for axis in &report.axes {
        table.add_row(vec![
            Cell::new(axis.axis),
            Cell::new(axis.left),
            Cell::new(format!("{} : {}", axis.left_count, axis.right_count)),
            Cell::new(axis.right),
            Cell::new(format!(
                "{:.0}% / {:.0}%",
                axis.left_percent, axis.right_percent
            )),
        ]);
    }
    writeln!(out, "\n{table}")?;

    for (title, items) in [
        ("Strengths", &desc.strengths),
        ("Weaknesses", &desc.weaknesses),
        ("Career suggestions", &desc.career),
    ] {
        if items.is_empty() {
            continue;
        }
        writeln!(out, "\n{title}:")?;
        for item in items {
            writeln!(out, "  - {item}")?;
        }
    }

    writeln!(out, "\nShare: {}", share_text(report))?;
    Ok(())
}

fn save_outputs(report: &QuizReport, formats: &[ResultFormat], output: &Path) -> Result<()> {
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    for fmt in formats {
        match fmt {
            ResultFormat::Text => {}
            ResultFormat::Json => {
                let path = output.join(format!("result-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Result saved to: {}", path.display());
            }
            ResultFormat::Html => {
                let path = output.join(format!("result-{timestamp}.html"));
                write_html_report(report, &path)?;
                eprintln!("HTML result: {}", path.display());
            }
            ResultFormat::Markdown => {
                let path = output.join(format!("result-{timestamp}.md"));
                write_markdown_report(report, &path)?;
                eprintln!("Markdown result: {}", path.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use typequiz_core::model::{Letter, Question, QuestionId, QuestionSet, QuizOption};

    fn engine() -> QuizEngine {
        let questions = [(Letter::E, Letter::I), (Letter::S, Letter::N)]
            .iter()
            .enumerate()
            .map(|(i, (a, b))| Question {
                id: QuestionId::from(i as u32 + 1),
                prompt: format!("Prompt {}", i + 1),
                options: vec![
                    QuizOption {
                        text: format!("pick {a}"),
                        letter: *a,
                    },
                    QuizOption {
                        text: format!("pick {b}"),
                        letter: *b,
                    },
                ],
            })
            .collect();
        QuizEngine::new(Arc::new(QuestionSet::new("t", questions).unwrap())).unwrap()
    }

    async fn drive(script: &str) -> (Result<Option<QuizOutcome>>, String) {
        let mut engine = engine();
        let mut input = BufReader::new(script.as_bytes()).lines();
        let mut out = Vec::new();
        let result = run_session(&mut engine, &mut input, &mut out, Duration::ZERO).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("2"), Command::Choose(2));
        assert_eq!(parse_command(" "), Command::Next);
        assert_eq!(parse_command("B"), Command::Back);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("0"), Command::Unknown);
        assert_eq!(parse_command("maybe"), Command::Unknown);
    }

    #[test]
    fn parses_result_formats() {
        assert_eq!(parse_formats("text").unwrap(), vec![ResultFormat::Text]);
        assert_eq!(
            parse_formats("json, md").unwrap(),
            vec![ResultFormat::Json, ResultFormat::Markdown]
        );
        assert_eq!(parse_formats("all").unwrap().len(), 3);

        let err = parse_formats("json,pdf").unwrap_err();
        assert!(err.to_string().contains("unknown format: pdf"));
    }

    #[test]
    fn progress_bar_fills() {
        assert_eq!(progress_bar(0.5, 4), "##--");
        assert_eq!(progress_bar(1.0, 4), "####");
    }

    #[tokio::test]
    async fn session_completes() {
        let (result, output) = drive("2\n2\n").await;
        let outcome = result.unwrap().unwrap();
        assert_eq!(outcome.type_code.to_string(), "INTJ");
        assert!(output.contains("Question 1/2"));
        assert!(output.contains("Question 2/2"));
        assert!(output.contains("Computing your result"));
    }

    #[tokio::test]
    async fn next_blocked_and_back_noop() {
        let (result, output) = drive("\nb\n1\nb\n\n1\n").await;
        assert!(result.unwrap().is_some());
        assert!(output.contains("Please choose an option first."));
        assert!(output.contains("Already at the first question."));
        assert!(output.contains(" * 1. pick E"));
    }

    #[tokio::test]
    async fn invalid_option_is_reported() {
        let (result, output) = drive("7\n1\n1\n").await;
        assert!(result.unwrap().is_some());
        assert!(output.contains("no option 7"));
    }

    #[tokio::test]
    async fn quit_and_eof() {
        let (result, _) = drive("q\n").await;
        assert!(result.unwrap().is_none());

        let (result, _) = drive("1\n").await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }
}
