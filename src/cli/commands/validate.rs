//! `storyreq validate` command - Validate analysis output files

use console::style;
use miette::Result;
use std::fs;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::schema::{SchemaRegistry, SchemaValidator};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Output files to validate
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Show summary only, don't show individual errors
    #[arg(long)]
    pub summary: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    files_checked: usize,
    files_passed: usize,
    files_failed: usize,
    total_errors: usize,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let validator =
        SchemaValidator::new(&SchemaRegistry::default()).map_err(|e| miette::miette!("{}", e))?;
    let mut stats = ValidationStats::default();

    for path in &args.paths {
        stats.files_checked += 1;
        let filename = path.display().to_string();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                stats.files_failed += 1;
                stats.total_errors += 1;
                println!("{} {}", style("✗").red(), filename);
                if !args.summary {
                    eprintln!("  failed to read {}: {}", filename, err);
                }
                continue;
            }
        };

        match validator.validate_str(&content, &filename) {
            Ok(kind) => {
                stats.files_passed += 1;
                if !global.quiet {
                    println!("{} {} ({})", style("✓").green(), filename, kind);
                }
            }
            Err(err) => {
                stats.files_failed += 1;
                stats.total_errors += err.violation_count();
                println!("{} {}", style("✗").red(), filename);
                if !args.summary {
                    eprintln!("{:?}", miette::Report::new(err));
                }
            }
        }
    }

    if !global.quiet {
        println!();
        println!(
            "Checked {} file(s): {} passed, {} failed ({} error(s))",
            stats.files_checked, stats.files_passed, stats.files_failed, stats.total_errors
        );
    }

    if stats.files_failed > 0 {
        return Err(miette::miette!(
            "{} file(s) failed validation",
            stats.files_failed
        ));
    }
    Ok(())
}
