//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    analyze::AnalyzeArgs, catalog::CatalogArgs, completions::CompletionsArgs,
    validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "storyreq")]
#[command(author, version, about = "User story requirements analyzer")]
#[command(long_about = "Derives functional requirements, non-functional requirements, edge cases and gaps from shopping-cart user stories.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a user story document
    Analyze(AnalyzeArgs),

    /// Show the requirement catalog
    Catalog(CatalogArgs),

    /// Validate analysis output files against the output schema
    Validate(ValidateArgs),

    /// Print the JSON schema for analysis output
    Schema,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Use the configured default (json if unset)
    #[default]
    Auto,
    /// JSON format (matches the output file)
    Json,
    /// YAML format
    Yaml,
    /// Markdown tables
    Md,
    /// Tab-separated values (for piping)
    Tsv,
    /// CSV format (for spreadsheets)
    Csv,
}
