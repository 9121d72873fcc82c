//! typequiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "typequiz", version, about = "Terminal personality-type quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz interactively
    Take {
        /// Question JSON file
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Type-description JSON file
        #[arg(long)]
        types: Option<PathBuf>,

        /// Also save the result: text, json, html, markdown, all
        #[arg(long)]
        format: Option<String>,

        /// Output directory for saved results
        #[arg(long)]
        output: Option<PathBuf>,

        /// Skip the pause before the result is revealed
        #[arg(long)]
        no_delay: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question and type-description files
    Validate {
        /// Question JSON file
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Type-description JSON file
        #[arg(long)]
        types: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the description of a personality type
    Show {
        /// Four-letter type code, e.g. INTJ
        code: String,

        /// Type-description JSON file
        #[arg(long)]
        types: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Re-render a saved JSON result
    Render {
        /// Result JSON file
        #[arg(long)]
        report: PathBuf,

        /// Output format: text, html, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Write into this directory instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create starter config and sample quiz data
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("typequiz=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            questions,
            types,
            format,
            output,
            no_delay,
            config,
        } => {
            commands::take::execute(commands::take::TakeArgs {
                questions,
                types,
                format,
                output,
                no_delay,
                config,
            })
            .await
        }
        Commands::Validate {
            questions,
            types,
            config,
        } => commands::validate::execute(questions, types, config),
        Commands::Show {
            code,
            types,
            config,
        } => commands::show::execute(code, types, config),
        Commands::Render {
            report,
            format,
            output,
        } => commands::render::execute(report, format, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
