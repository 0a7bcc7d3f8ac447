//! `storyreq schema` command - Print the output JSON schemas

use miette::Result;

use crate::schema::{SchemaKind, SchemaRegistry};

pub fn run() -> Result<()> {
    let registry = SchemaRegistry::default();
    for kind in SchemaKind::all() {
        let source = registry
            .get(*kind)
            .ok_or_else(|| miette::miette!("embedded schema '{}' is missing", kind.file_name()))?;
        println!("{}", source.trim_end());
    }
    Ok(())
}
