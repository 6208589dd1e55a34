use crate::catalog::PoCatalog;
use crate::error::PoxlsResult;
use crate::excel::{XlsxExporter, XlsxImporter};
use crate::types::{CommentKind, ExportOptions};
use crate::writer::PoWriter;
use colored::Colorize;
use std::path::Path;

/// Execute the export command: PO catalogs → one workbook.
pub fn export(
    catalog_specs: &[String],
    output: &Path,
    comment_kinds: &[CommentKind],
    options: ExportOptions,
    verbose: bool,
) -> PoxlsResult<()> {
    println!("{}", "📤 poxls - PO to Excel".bold().green());
    println!("   Output: {}\n", output.display());

    let mut catalogs = Vec::with_capacity(catalog_specs.len());
    for spec in catalog_specs {
        let catalog = PoCatalog::open(spec)?;
        if verbose {
            println!(
                "   📖 {} ({} messages) → column {}",
                catalog.path.display(),
                catalog.len(),
                catalog.locale.bright_blue()
            );
        }
        catalogs.push(catalog);
    }

    let exporter = XlsxExporter::new(catalogs, comment_kinds, options);

    if verbose {
        println!("   Columns: {}", exporter.layout().headers().join(" | "));
        println!("   Rows: {}\n", exporter.collect_keys().len());
    }

    exporter.export(output)?;

    println!("{}", "✅ Export complete!".bold().green());
    println!("   Excel file: {}\n", output.display());
    Ok(())
}

/// Execute the import command: one locale column of a workbook → PO catalog.
pub fn import(
    locale: &str,
    input: &Path,
    output: &Path,
    copy_metadata: bool,
    verbose: bool,
) -> PoxlsResult<()> {
    println!("{}", "📥 poxls - Excel to PO".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Locale: {}", locale.bright_blue());
    println!("   Output: {}\n", output.display());

    let report = XlsxImporter::new(input, locale).import()?;

    for warning in &report.warnings {
        println!("{}", format!("⚠️  {}", warning).yellow());
    }
    if verbose {
        println!("   Found {} rows", report.rows.len());
    }

    let written = PoWriter::new(locale, input, output)
        .copy_metadata(copy_metadata)
        .write(&report.rows)?;

    println!("{}", "✅ Import complete!".bold().green());
    println!("   Wrote {} messages to {}\n", written, output.display());
    Ok(())
}
