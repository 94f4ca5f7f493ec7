use chrono::TimeZone;

use super::*;
use crate::lead::UNAVAILABLE;

/// Minimal CSV parser (quotes + CRLF tolerant) for round-trip assertions.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => row.push(std::mem::take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

fn sample_lead(name: &str, address: &str) -> Lead {
    Lead {
        name: name.to_owned(),
        email: "contact@acme.in".to_owned(),
        phone: "+91 98123 45678".to_owned(),
        address: address.to_owned(),
        category: "cafe".to_owned(),
        website: "https://acme.in".to_owned(),
        social_links: UNAVAILABLE.to_owned(),
    }
}

#[test]
fn header_row_matches_fixed_column_order() {
    let csv = leads_to_csv(&[]);
    let rows = parse_rows(&csv);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], CSV_HEADERS.map(str::to_owned).to_vec());
}

#[test]
fn embedded_commas_round_trip() {
    let leads = vec![
        sample_lead("First Cafe", "12/4, Tower 3, MG Road, Kochi - 682001"),
        sample_lead("Second Cafe", "88, Market Area, Kochi - 682002"),
    ];
    let csv = leads_to_csv(&leads);
    let rows = parse_rows(&csv);

    assert_eq!(rows.len(), 3);
    for (lead, row) in leads.iter().zip(&rows[1..]) {
        assert_eq!(
            row,
            &vec![
                lead.name.clone(),
                lead.email.clone(),
                lead.phone.clone(),
                lead.address.clone(),
                lead.category.clone(),
                lead.website.clone(),
                lead.social_links.clone(),
            ]
        );
    }
}

#[test]
fn embedded_quotes_are_doubled_and_round_trip() {
    let mut lead = sample_lead("The \"Best\" Cafe", "MG Road");
    lead.social_links = "Facebook: https://facebook.com/best | Instagram: https://instagram.com/best".to_owned();
    let csv = leads_to_csv(std::slice::from_ref(&lead));
    assert!(csv.contains("\"The \"\"Best\"\" Cafe\""));

    let rows = parse_rows(&csv);
    assert_eq!(rows[1][0], "The \"Best\" Cafe");
    assert_eq!(rows[1][6], lead.social_links);
}

#[test]
fn export_filename_normalizes_and_stamps() {
    let at = Local.with_ymd_and_hms(2025, 3, 9, 14, 5, 9).unwrap();
    assert_eq!(
        export_filename("Training Institute", "New  Delhi", at),
        "leads_training_institute_new_delhi_20250309_140509.csv"
    );
}

#[test]
fn export_filename_drops_hostile_characters() {
    let at = Local.with_ymd_and_hms(2025, 3, 9, 14, 5, 9).unwrap();
    assert_eq!(
        export_filename("Cafe / Bar?", "Kochi*", at),
        "leads_cafe_bar_kochi_20250309_140509.csv"
    );
}

#[test]
fn write_export_creates_parseable_file() {
    let dir = std::env::temp_dir().join("leadscout_export_test");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let leads = vec![sample_lead("First Cafe", "MG Road, Kochi")];
    let path = write_export(&dir, "cafe", "Kochi", &leads).unwrap();
    assert!(path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("leads_cafe_kochi_"));

    let text = std::fs::read_to_string(&path).unwrap();
    let rows = parse_rows(&text);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "First Cafe");
}
