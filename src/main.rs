// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use multilingual_summarizer::utils::logging::{
    format_error, format_info, format_success, format_warning,
};
use multilingual_summarizer::{Config, SummaryRequest, SummaryService, Summarizer, Validator};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "multilingual_summarizer")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Extractive summarizer with optional translation", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        #[arg(long, env = "SUMMARIZER_HOST")]
        host: Option<String>,

        #[arg(short, long, env = "SUMMARIZER_PORT")]
        port: Option<u16>,
    },

    /// Summarize a document from a file or stdin
    Summarize {
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        #[arg(short = 'n', long, value_name = "NUM")]
        sentences: Option<usize>,

        #[arg(short, long)]
        language: Option<String>,

        /// Print every sentence with its score
        #[arg(long)]
        explain: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    multilingual_summarizer::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(config, host, port).await?;
        }
        Commands::Summarize {
            file,
            sentences,
            language,
            explain,
        } => {
            cmd_summarize(&config, file, sentences, language, explain).await?;
        }
    }

    Ok(())
}

async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate().context("Invalid server configuration")?;

    let service =
        SummaryService::from_config(&config).context("Failed to initialize summary service")?;

    info!("Starting summarizer API on {}", config.server.bind_address());
    multilingual_summarizer::server::serve(&config.server, Arc::new(service))
        .await
        .context("Server failed")?;

    Ok(())
}

async fn cmd_summarize(
    config: &Config,
    file: Option<PathBuf>,
    sentences: Option<usize>,
    language: Option<String>,
    explain: bool,
) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    if explain {
        explain_scores(config, &text, sentences)?;
    }

    let service =
        SummaryService::from_config(config).context("Failed to initialize summary service")?;

    let request = SummaryRequest {
        text,
        language,
        sentences,
    };

    match service.summarize(request).await {
        Ok(outcome) => {
            if let Some(warning) = &outcome.warning {
                eprintln!("{}", format_warning(warning));
            }
            eprintln!(
                "{}",
                format_success(&format!("Summary ({})", outcome.language))
            );
            println!("{}", outcome.summary);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            Err(e.into())
        }
    }
}

fn explain_scores(config: &Config, text: &str, sentences: Option<usize>) -> Result<()> {
    let summarizer =
        Summarizer::from_config(&config.summarizer).context("Failed to load summarizer")?;
    let count = sentences.unwrap_or(config.summarizer.default_sentences);
    let detail = summarizer
        .summarize_detailed(text.trim(), count)
        .context("Failed to score sentences")?;

    if detail.short_circuit {
        eprintln!(
            "{}",
            format_info(&format!(
                "{} sentences, {} requested: document returned unchanged",
                detail.sentences.len(),
                count
            ))
        );
        return Ok(());
    }

    for (i, sentence) in detail.sentences.iter().enumerate() {
        let marker = if detail.selected.contains(&i) { "*" } else { " " };
        let score = detail.scores.get(i).copied().unwrap_or_default();
        eprintln!(
            "{} [{:>3}] {:>8.4}  {}",
            marker,
            i,
            score,
            Validator::truncate_text(sentence, 80)
        );
    }

    Ok(())
}
