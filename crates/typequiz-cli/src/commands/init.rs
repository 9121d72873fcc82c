//! The `typequiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("typequiz.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("data")?;
    write_if_missing(Path::new("data/questions.json"), SAMPLE_QUESTIONS)?;
    write_if_missing(Path::new("data/types.json"), SAMPLE_TYPES)?;

    println!("\nNext steps:");
    println!("  1. Edit data/questions.json and data/types.json to taste");
    println!("  2. Run: typequiz validate");
    println!("  3. Run: typequiz take");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# typequiz configuration

questions_path = "data/questions.json"
types_path = "data/types.json"

# Pause before the result is revealed.
reveal_delay_ms = 2000

# Where `take --format` writes saved results.
output_dir = "./typequiz-results"
default_format = "text"
"#;

const SAMPLE_QUESTIONS: &str = include_str!("../../data/questions.json");
const SAMPLE_TYPES: &str = include_str!("../../data/types.json");
