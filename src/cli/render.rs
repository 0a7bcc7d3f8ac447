//! Output rendering for analyses and catalog listings
//!
//! JSON and YAML serialize the document as-is. Markdown, TSV and CSV flatten
//! the record sections into rows.

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;
use crate::core::entity::Record;
use crate::core::loader::to_json_pretty;
use crate::entities::{AnalysisOutcome, Sections};

/// Render an analysis outcome
pub fn render_outcome(outcome: &AnalysisOutcome, format: OutputFormat) -> Result<String> {
    match outcome {
        AnalysisOutcome::Analysis(result) => render_document(outcome, result.sections(), format),
        AnalysisOutcome::Error(err) => match format {
            OutputFormat::Yaml => serde_yml::to_string(outcome).into_diagnostic(),
            OutputFormat::Md | OutputFormat::Tsv | OutputFormat::Csv => {
                Ok(format!("{}\n", err.error))
            }
            OutputFormat::Auto | OutputFormat::Json => Ok(format!("{}\n", to_json_pretty(outcome)?)),
        },
    }
}

/// Render a document whose records are exposed as sections
pub fn render_document<T: Serialize>(
    document: &T,
    sections: Sections<'_>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Auto | OutputFormat::Json => Ok(format!("{}\n", to_json_pretty(document)?)),
        OutputFormat::Yaml => serde_yml::to_string(document).into_diagnostic(),
        OutputFormat::Md => Ok(render_markdown(sections)),
        OutputFormat::Tsv => Ok(render_tsv(sections)),
        OutputFormat::Csv => render_csv(sections),
    }
}

fn render_markdown(sections: Sections<'_>) -> String {
    let mut output = String::new();

    if !sections.functional.is_empty() {
        output.push_str("## Functional Requirements\n\n");
        let mut builder = Builder::default();
        builder.push_record(["ID", "Description", "Priority", "Test Complexity", "Category", "Source"]);
        for req in sections.functional {
            builder.push_record([
                req.id.to_string(),
                req.description.clone(),
                req.priority.to_string(),
                req.test_complexity.to_string(),
                req.category.clone(),
                req.source.clone(),
            ]);
        }
        output.push_str(&builder.build().with(Style::markdown()).to_string());
        output.push_str("\n\n");
    }

    if !sections.non_functional.is_empty() {
        output.push_str("## Non-Functional Requirements\n\n");
        let mut builder = Builder::default();
        builder.push_record(["ID", "Description", "Type", "Measurable", "Test Complexity", "Source"]);
        for req in sections.non_functional {
            builder.push_record([
                req.id.to_string(),
                req.description.clone(),
                req.nfr_type.to_string(),
                if req.measurable { "yes" } else { "no" }.to_string(),
                req.test_complexity.to_string(),
                req.source.clone(),
            ]);
        }
        output.push_str(&builder.build().with(Style::markdown()).to_string());
        output.push_str("\n\n");
    }

    if !sections.edge_cases.is_empty() {
        output.push_str("## Edge Cases\n\n");
        let mut builder = Builder::default();
        builder.push_record(["ID", "Description", "Scenario"]);
        for case in sections.edge_cases {
            builder.push_record([
                case.id.to_string(),
                case.description.clone(),
                case.scenario.clone(),
            ]);
        }
        output.push_str(&builder.build().with(Style::markdown()).to_string());
        output.push_str("\n\n");
    }

    if !sections.gaps.is_empty() {
        output.push_str("## Gaps\n\n");
        for gap in sections.gaps {
            output.push_str(&format!("- {}\n", gap));
        }
    }

    output
}

/// One flattened output row
struct Row {
    section: &'static str,
    id: String,
    description: String,
}

fn record_rows<R: Record>(records: &[R]) -> impl Iterator<Item = Row> + '_ {
    records.iter().map(|r| Row {
        section: R::KIND.section(),
        id: r.id().to_string(),
        description: r.description().to_string(),
    })
}

fn rows(sections: Sections<'_>) -> Vec<Row> {
    record_rows(sections.functional)
        .chain(record_rows(sections.non_functional))
        .chain(record_rows(sections.edge_cases))
        .chain(sections.gaps.iter().map(|gap| Row {
            section: "gap",
            id: String::new(),
            description: gap.clone(),
        }))
        .collect()
}

fn render_tsv(sections: Sections<'_>) -> String {
    rows(sections)
        .into_iter()
        .map(|row| format!("{}\t{}\t{}\n", row.section, row.id, row.description))
        .collect()
}

fn render_csv(sections: Sections<'_>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["section", "id", "description"])
        .into_diagnostic()?;
    for row in rows(sections) {
        writer
            .write_record([row.section, row.id.as_str(), row.description.as_str()])
            .into_diagnostic()?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| miette::miette!("failed to flush CSV output: {}", e))?;
    String::from_utf8(bytes).into_diagnostic()
}
