//! The `typequiz show` command.

use std::path::PathBuf;

use anyhow::Result;

use typequiz_core::model::TypeCode;
use typequiz_core::parser;

pub fn execute(code: String, types: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::resolve_config(config_path, None, types)?;
    let code: TypeCode = code.parse()?;
    let catalog = parser::parse_catalog(&config.types_path)?;
    let desc = catalog.lookup(code)?;

    println!("{code} — {}", desc.name);
    if !desc.keywords.is_empty() {
        println!("Keywords: {}", desc.keywords.join(", "));
    }
    if !desc.description.is_empty() {
        println!("\n{}", desc.description);
    }
    for (title, items) in [
        ("Strengths", &desc.strengths),
        ("Weaknesses", &desc.weaknesses),
        ("Career suggestions", &desc.career),
    ] {
        if !items.is_empty() {
            println!("\n{title}: {}", items.join(", "));
        }
    }

    Ok(())
}
