//! Plain-text rendering of the last completed run.

use leadscout_core::{ExtractionSession, Lead};

pub(super) struct Summary {
    pub total: usize,
    pub with_email: usize,
    pub with_phone: usize,
    pub with_website: usize,
}

pub(super) fn summarize(leads: &[Lead]) -> Summary {
    Summary {
        total: leads.len(),
        with_email: leads.iter().filter(|l| l.has_email()).count(),
        with_phone: leads.iter().filter(|l| l.has_phone()).count(),
        with_website: leads.iter().filter(|l| l.has_website()).count(),
    }
}

const NAME_W: usize = 28;
const PHONE_W: usize = 18;
const ADDRESS_W: usize = 36;
const CATEGORY_W: usize = 16;
const WEBSITE_W: usize = 30;

pub(super) fn render(session: &ExtractionSession) {
    if session.is_empty() {
        println!(
            "No results found for \"{}\" in \"{}\". Try different keywords.",
            session.keyword(),
            session.location()
        );
        return;
    }

    let summary = summarize(session.results());
    println!(
        "Total leads: {} | With email: {} | With phone: {} | With website: {}",
        summary.total, summary.with_email, summary.with_phone, summary.with_website
    );
    println!();

    println!(
        "{} {} {} {} {}",
        cell("Business Name", NAME_W),
        cell("Phone", PHONE_W),
        cell("Address", ADDRESS_W),
        cell("Category", CATEGORY_W),
        cell("Website", WEBSITE_W),
    );
    for lead in session.results() {
        println!(
            "{} {} {} {} {}",
            cell(&lead.name, NAME_W),
            cell(&lead.phone, PHONE_W),
            cell(&lead.address, ADDRESS_W),
            cell(&lead.category, CATEGORY_W),
            cell(&lead.website, WEBSITE_W),
        );
    }

    println!(
        "\nTotal records found: {} businesses for \"{}\" in \"{}\"",
        summary.total,
        session.keyword(),
        session.location()
    );
}

/// Pads or truncates to a fixed column width, marking truncation with an
/// ellipsis.
fn cell(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return format!("{value:<width$}");
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
