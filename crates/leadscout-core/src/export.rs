//! CSV export of a completed extraction run.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::lead::Lead;

/// Export column order. Matches the table the original tool produced, so
/// downstream spreadsheets keep working across versions.
pub const CSV_HEADERS: [&str; 7] = [
    "Business Name",
    "Email ID",
    "Phone Number",
    "Location / Address",
    "Business Category",
    "Website URL",
    "Social Media Profiles",
];

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer, quoting fields that need it and
/// doubling embedded quotes.
///
/// # Errors
///
/// Propagates any I/O error from the underlying writer.
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if first {
            first = false;
        } else {
            write!(w, ",")?;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

fn lead_row(lead: &Lead) -> [&str; 7] {
    [
        &lead.name,
        &lead.email,
        &lead.phone,
        &lead.address,
        &lead.category,
        &lead.website,
        &lead.social_links,
    ]
}

/// Renders the full export: header line plus one row per lead.
#[must_use]
pub fn leads_to_csv(leads: &[Lead]) -> String {
    let mut out = Vec::new();
    // Vec<u8> writes cannot fail.
    write_row(&mut out, &CSV_HEADERS).expect("writing to Vec<u8> cannot fail");
    for lead in leads {
        write_row(&mut out, &lead_row(lead)).expect("writing to Vec<u8> cannot fail");
    }
    String::from_utf8(out).expect("CSV output is valid UTF-8")
}

/// Lowercases a filename component and collapses runs of whitespace into a
/// single underscore. Characters hostile to filesystems are dropped.
fn normalize_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_gap = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            pending_gap = true;
            continue;
        }
        if !(ch.is_alphanumeric() || ch == '-' || ch == '_' || ch == '.') {
            continue;
        }
        if pending_gap && !out.is_empty() {
            out.push('_');
        }
        pending_gap = false;
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }
    out
}

/// Builds the export filename:
/// `leads_<keyword>_<location>_<YYYYMMDD_HHMMSS>.csv`.
#[must_use]
pub fn export_filename(keyword: &str, location: &str, at: DateTime<Local>) -> String {
    let keyword = normalize_component(keyword);
    let location = normalize_component(location);
    let stamp = at.format("%Y%m%d_%H%M%S");
    format!("leads_{keyword}_{location}_{stamp}.csv")
}

/// Writes the export file into `dir` and returns the written path.
///
/// # Errors
///
/// Returns any I/O error from creating or writing the file.
pub fn write_export(
    dir: &Path,
    keyword: &str,
    location: &str,
    leads: &[Lead],
) -> io::Result<PathBuf> {
    let path = dir.join(export_filename(keyword, location, Local::now()));
    let mut w = BufWriter::new(File::create(&path)?);
    w.write_all(leads_to_csv(leads).as_bytes())?;
    w.flush()?;
    Ok(path)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
