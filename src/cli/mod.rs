//! CLI module for ragline
//!
//! Provides command-line parsing for the ragline binary. Uses clap for
//! argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ragline - Gemini-backed RAG generation pipeline
#[derive(Parser, Debug)]
#[command(
    name = "ragline",
    version,
    about = "Gemini-backed RAG generation pipeline",
    long_about = "Pulls a prompt template from a remote hub, formats it with your\n\
                  context and question, and answers with a Gemini chat model.",
    after_help = "EXAMPLES:\n    \
                  ragline ask \"What is Rust?\"                      # No context\n    \
                  ragline ask \"Summarize\" --context-file notes.md  # Context from a file\n    \
                  ragline ask \"Why?\" --stream                      # Stream the answer\n    \
                  ragline config                                   # Show resolved config"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a question through the generation chain
    Ask {
        /// The question to answer
        question: String,

        /// Context passed to the prompt template
        #[arg(short, long, conflicts_with = "context_file")]
        context: Option<String>,

        /// Read the context from a file
        #[arg(long, value_name = "PATH")]
        context_file: Option<PathBuf>,

        /// Prompt-hub handle to pull (owner/name)
        #[arg(long, env = "PROMPT_HANDLE")]
        prompt: Option<String>,

        /// Stream the answer as it is generated
        #[arg(short, long)]
        stream: bool,
    },

    /// Show the resolved configuration
    Config,
}
