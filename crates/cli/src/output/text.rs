use anyhow::Result;
use colored::{ColoredString, Colorize};
use dacg_catalog::record::{Category, CheckerRecord};
use dacg_catalog::report::LoadReport;

fn category_label(category: Category) -> ColoredString {
    let label = category.key().to_uppercase();
    match category {
        Category::Npm => label.red().bold(),
        Category::Wp => label.blue().bold(),
        Category::Iis => label.cyan().bold(),
        Category::Technote => label.yellow().bold(),
        Category::Zeroboard => label.magenta().bold(),
    }
}

pub fn print_records(records: &[&CheckerRecord], requested: usize, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }

    if records.is_empty() {
        println!(
            "  {} No checker matched the {} given id(s).",
            "✗".red().bold(),
            requested
        );
        return Ok(());
    }

    for record in records {
        println!("  [{}] {}", category_label(record.category()), record.id().bold());
        match record {
            CheckerRecord::Npm(npm) => {
                println!("    {:<18} {}", "Library:".dimmed(), npm.library);
            }
            CheckerRecord::Wp(r) | CheckerRecord::Iis(r) => {
                println!("    {:<18} {}", "Target:".dimmed(), r.target);
                println!("    {:<18} {}", "Name:".dimmed(), r.name);
            }
            CheckerRecord::Technote(r) | CheckerRecord::Zeroboard(r) => {
                println!("    {:<18} {}", "Name:".dimmed(), r.name);
            }
        }
        println!("    {:<18} {}", "Versions:".dimmed(), record.version_interval());
        println!("    {:<18} {}", "Vulnerability:".dimmed(), record.vulnerability());
        println!();
    }

    println!("  Matched {} of {} requested id(s)", records.len(), requested);
    Ok(())
}

pub fn print_report(report: &LoadReport, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }

    println!();
    println!("{}", "  Load report".bold().underline());
    println!("    Location:  {}", report.location);

    if let Some(err) = &report.discovery_error {
        println!("    {} {}", "Discovery failed:".red().bold(), err);
    }
    for loaded in &report.loaded {
        println!("    {} {} ({} records)", "✓".green(), loaded.name, loaded.records);
    }
    for skipped in &report.skipped {
        println!("    {} {}: {}", "✗".red(), skipped.name, skipped.reason);
    }
    for ignored in &report.ignored {
        println!("    {} {} (not JSON)", "-".dimmed(), ignored);
    }
    println!("    Overwritten ids: {}", report.overwritten);
    println!();
    Ok(())
}
