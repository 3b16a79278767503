use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textbrief_common::{logger, AppConfig};
use textbrief_llm::{build_summarizer, OutputFormat, SummaryRequest};
use tokio::io::AsyncReadExt;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "textbrief")]
#[command(about = "textbrief - summarize long text with a bounded-context model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides SERVER_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides SERVER_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Summarize a file (or stdin) once and print the result
    Summarize {
        /// Output layout
        #[arg(long, default_value = "paragraph", value_parser = ["paragraph", "bullets"])]
        format: String,

        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // AppConfig::from_env() loads .env from the working directory;
    // the project root copy is loaded first so it wins
    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.validate()?;
            serve(config).await?;
        }
        Some(Commands::Summarize { format, file }) => {
            logger::setup_console_logging(&config.log_level)?;
            summarize_once(&config, OutputFormat::parse_lenient(&format), file).await?;
        }
        None => serve(config).await?,
    }

    Ok(())
}

async fn serve(config: AppConfig) -> Result<()> {
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("textbrief starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Model: {} @ {}", config.llm_model, config.ollama_base_url);
    tracing::info!("  Chunk size: {} chars", config.chunk_max_chars);

    println!("Server listening on http://{}", config.server_bind_address());

    textbrief_server::start_server(config).await?;
    Ok(())
}

async fn summarize_once(config: &AppConfig, format: OutputFormat, file: Option<PathBuf>) -> Result<()> {
    let text = match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read stdin")?;
            buf
        }
    };

    let request = SummaryRequest::new(&text, format)?;
    let summarizer = build_summarizer(config)?;
    let summary = summarizer.summarize_request(&request).await?;

    println!("{}", summary);
    Ok(())
}
