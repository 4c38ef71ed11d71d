use anyhow::Result;
use dacg_catalog::SharedCatalog;

use crate::output;
use crate::OutputFormat;

pub fn run(
    catalog: &SharedCatalog,
    ids: &[String],
    format: OutputFormat,
    no_color: bool,
) -> Result<()> {
    let records = catalog.get_info_list(ids);

    match format {
        OutputFormat::Json => output::json::print(&records)?,
        OutputFormat::Text => output::text::print_records(&records, ids.len(), no_color)?,
    }

    // Nothing matched
    if records.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
