//! `storyreq catalog` command - Show the requirement catalog

use clap::ValueEnum;
use miette::Result;

use crate::analyzer::catalog::CatalogListing;
use crate::cli::helpers::resolve_format;
use crate::cli::render::render_document;
use crate::cli::GlobalOpts;
use crate::core::Config;

/// Catalog section filter
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SectionFilter {
    Functional,
    NonFunctional,
    EdgeCases,
    Gaps,
    /// Every section
    All,
}

#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    /// Only show one section
    #[arg(long, default_value = "all")]
    pub section: SectionFilter,
}

pub fn run(args: CatalogArgs, global: &GlobalOpts) -> Result<()> {
    let listing = filter(CatalogListing::full(), args.section);
    let format = resolve_format(global.format, &Config::load());
    print!("{}", render_document(&listing, listing.sections(), format)?);
    Ok(())
}

fn filter(mut listing: CatalogListing, section: SectionFilter) -> CatalogListing {
    if section != SectionFilter::All {
        if section != SectionFilter::Functional {
            listing.functional_requirements.clear();
        }
        if section != SectionFilter::NonFunctional {
            listing.non_functional_requirements.clear();
        }
        if section != SectionFilter::EdgeCases {
            listing.edge_cases.clear();
        }
        if section != SectionFilter::Gaps {
            listing.gaps_identified.clear();
        }
    }
    listing
}
