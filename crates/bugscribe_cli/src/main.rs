//! bugscribe CLI: generate a bug report document, copy it to the clipboard.

mod clipboard;

use bugscribe::{GeminiClient, Generator, ReportInput, SummarizerConfig};
use bugscribe_report::{render_markdown, render_report};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Copy(args) => run_copy(args),
    }
}

#[derive(Parser)]
#[command(name = "bugscribe")]
#[command(about = "Bug report generator with an AI one-paragraph summary (Gemini)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a Markdown bug report with an AI summary.
    Generate(GenerateArgs),
    /// Copy a report document (file or stdin) to the clipboard.
    Copy(CopyArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    /// Issue title.
    #[arg(long)]
    title: String,
    /// Issue details.
    #[arg(long)]
    details: String,
    /// Steps to reproduce the issue.
    #[arg(long)]
    repro: String,
    /// Expected result.
    #[arg(long)]
    expected: String,
    /// Actual result.
    #[arg(long)]
    actual: String,
    /// Video link (e.g. YouTube, Vimeo).
    #[arg(long, default_value = "")]
    video: String,
    /// Write the Markdown document to this path.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Write the structured report record as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Copy the document to the system clipboard.
    #[arg(long)]
    copy: bool,
}

#[derive(Parser)]
struct CopyArgs {
    /// File to copy; reads stdin when omitted.
    path: Option<PathBuf>,
}

fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Credential check comes first: a missing key aborts before any work.
    let config = SummarizerConfig::from_env()?;

    // Fields are trimmed at collection; the core interpolates them verbatim.
    let input = ReportInput {
        title: args.title.trim().to_string(),
        details: args.details.trim().to_string(),
        repro_steps: args.repro.trim().to_string(),
        expected: args.expected.trim().to_string(),
        actual: args.actual.trim().to_string(),
        video_link: args.video.trim().to_string(),
    };
    if !input.video_link.is_empty() && url::Url::parse(&input.video_link).is_err() {
        warn!(link = %input.video_link, "video link does not parse as a URL; keeping it as-is");
    }

    let generator = Generator::new(GeminiClient::new(config)?);
    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(generator.generate(&input))?;
    if let Some(e) = &outcome.summarizer_error {
        eprintln!("warning: summarizer call failed ({e}); report generated with fallback summary");
    }

    let markdown = render_markdown(&outcome.report);
    println!("{markdown}");
    if let Some(out) = &args.out {
        render_report(&outcome.report, out)?;
        info!(path = %out.display(), "document written");
    }
    if let Some(json_path) = &args.json {
        std::fs::write(json_path, serde_json::to_string_pretty(&outcome.report)?)?;
        info!(path = %json_path.display(), "report record written");
    }
    if args.copy {
        clipboard::copy(&markdown)?;
        info!("document copied to clipboard");
    }
    Ok(())
}

fn run_copy(args: CopyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &args.path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    clipboard::copy(&text)?;
    info!(chars = text.len(), "copied to clipboard");
    Ok(())
}
