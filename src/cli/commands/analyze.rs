//! `storyreq analyze` command - Derive requirements from a user story

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::analyzer::analyze;
use crate::cli::helpers::resolve_format;
use crate::cli::render::render_outcome;
use crate::cli::GlobalOpts;
use crate::core::loader::{self, DEFAULT_INPUT};
use crate::core::{Config, StoryInput};
use crate::entities::AnalysisOutcome;

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON document with a "user_story" field ("-" reads stdin)
    #[arg(default_value = DEFAULT_INPUT, conflicts_with = "story")]
    pub input: PathBuf,

    /// Analyze this text directly instead of reading a document
    #[arg(long, short = 's')]
    pub story: Option<String>,

    /// Write the JSON result to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    let input = match args.story {
        Some(text) => StoryInput::from(text),
        None if args.input.as_os_str() == "-" => {
            loader::read_request_from(std::io::stdin().lock(), "<stdin>")?
        }
        None => loader::read_request(&args.input)?,
    };

    let outcome = analyze(input);

    match &outcome {
        AnalysisOutcome::Analysis(result) => {
            tracing::info!(counts = %result.counts(), "analysis complete");
        }
        AnalysisOutcome::Error(err) => {
            if !global.quiet {
                eprintln!("{} {}", style("!").yellow(), err.error);
            }
        }
    }

    match args.output.or(config.output.clone()) {
        Some(path) => {
            loader::write_outcome(&path, &outcome)?;
            if !global.quiet {
                println!("Done! {} is created.", path.display());
            }
        }
        None => {
            let format = resolve_format(global.format, &config);
            print!("{}", render_outcome(&outcome, format)?);
        }
    }

    Ok(())
}
