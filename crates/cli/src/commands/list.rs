use anyhow::Result;
use dacg_catalog::record::CheckerRecord;
use dacg_catalog::report::LoadReport;
use dacg_catalog::SharedCatalog;
use serde::Serialize;

use crate::output;
use crate::OutputFormat;

#[derive(Serialize)]
struct Listing<'a> {
    checkers: Vec<&'a CheckerRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a LoadReport>,
}

pub fn run(
    catalog: &SharedCatalog,
    format: OutputFormat,
    report: bool,
    no_color: bool,
) -> Result<()> {
    let catalog = catalog.get();

    match format {
        OutputFormat::Json => output::json::print(&Listing {
            checkers: catalog.records().collect(),
            report: report.then(|| catalog.report()),
        })?,
        OutputFormat::Text => {
            println!(
                "{:<45} {:<10} {:<25} Version interval",
                "Id", "Category", "Subject"
            );
            println!("{}", "-".repeat(100));

            for record in catalog.records() {
                println!(
                    "{:<45} {:<10} {:<25} {}",
                    record.id(),
                    record.category(),
                    record.subject(),
                    record.version_interval()
                );
            }

            println!("\nTotal: {} checkers", catalog.len());
            if report {
                output::text::print_report(catalog.report(), no_color)?;
            }
        }
    }

    Ok(())
}
