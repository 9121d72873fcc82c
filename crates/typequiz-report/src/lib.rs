//! typequiz-report — Result page rendering.
//!
//! Turns a finished [`typequiz_core::report::QuizReport`] into a
//! self-contained HTML page or Markdown, plus a one-line share message.

pub mod html;
pub mod markdown;

#[cfg(test)]
mod test_support;
