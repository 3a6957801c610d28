use clap::Parser;
use futures::StreamExt;
use ragline::chains::GenerationChain;
use ragline::cli::output::Output;
use ragline::cli::{Cli, Commands};
use ragline::llm::{ChatClientFactory, GenerationOptions};
use ragline::prompts::PromptHubClient;
use ragline::types::{AppError, Result};
use ragline::utils::Config;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    init_tracing(cli.verbose);

    if let Err(e) = run(cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "ragline=debug" } else { "ragline=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    let config = Config::from_env()?;

    match cli.command {
        Commands::Ask {
            question,
            context,
            context_file,
            prompt,
            stream,
        } => {
            let context = match (context, context_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
                    AppError::Internal(format!(
                        "Failed to read context file {}: {}",
                        path.display(),
                        e
                    ))
                })?,
                (None, None) => String::new(),
            };
            let handle = prompt.unwrap_or_else(|| config.hub.prompt_handle.clone());

            let hub = PromptHubClient::new(&config.hub.base_url);
            let factory = ChatClientFactory::new(config.chat_provider());
            let chain = GenerationChain::from_hub(&hub, &factory, &handle)
                .await?
                .with_options(GenerationOptions {
                    temperature: Some(config.chain.temperature),
                    ..GenerationOptions::default()
                });

            if stream {
                let mut deltas = chain.stream(&context, &question).await?;
                let mut stdout = std::io::stdout();
                while let Some(delta) = deltas.next().await {
                    write!(stdout, "{}", delta?)
                        .and_then(|_| stdout.flush())
                        .map_err(|e| AppError::Internal(format!("Failed to write output: {}", e)))?;
                }
                println!();
            } else {
                let answer = chain.answer(&context, &question).await?;
                output.answer(&answer);
            }
        }

        Commands::Config => {
            output.info("Resolved configuration");
            output.field(
                "api key",
                if config.gemini.api_key.is_empty() {
                    "(not set)"
                } else {
                    "(set)"
                },
            );
            output.field("api base", &config.gemini.api_base);
            output.field("chat model", &config.gemini.chat_model);
            output.field("embedding model", &config.gemini.embedding_model);
            output.field("hub url", &config.hub.base_url);
            output.field("prompt handle", &config.hub.prompt_handle);
            output.field("temperature", &config.chain.temperature.to_string());
        }
    }

    Ok(())
}
