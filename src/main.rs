use clap::Parser;
use docx_analyzer_lib::commands::analyze_docx_path;
use docx_analyzer_lib::AnalyzerConfig;
use serde::Serialize;
use std::path::PathBuf;

/// Extract operator commands from attachments embedded in DOCX files.
#[derive(Parser, Debug)]
#[command(name = "docx-analyzer", version, about)]
struct Cli {
    /// DOCX files to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log every attachment decision
    #[arg(short, long)]
    verbose: bool,
}

fn render<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config = AnalyzerConfig::from_env();
    let mut failed = 0usize;

    for path in &cli.files {
        match analyze_docx_path(path, &config) {
            Ok(result) => println!("{}", render(&result, cli.pretty)?),
            Err(e) => {
                failed += 1;
                log::warn!("{}: {e}", path.display());
                eprintln!("{}", render(&serde_json::json!({ "error": e }), cli.pretty)?);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} file(s) could not be analyzed", cli.files.len());
    }
    Ok(())
}
