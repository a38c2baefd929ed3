//! PDF balance reports for customers and suppliers.
//!
//! Layout is a plain A4 table: shop header, one row per party and a total
//! line. Rows that do not fit on a page continue on the next one.
//!
//! Text is set in embedded DejaVu Sans so Arabic names, categories and
//! currency symbols have glyphs. Glyphs are placed one per character; there
//! is no contextual shaping or right-to-left reordering.

use anyhow::{anyhow, Result};
use chrono::Local;
use printpdf::{IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use tracing::info;

use super::errors::LedgerError;
use crate::storage::{Ledger, LedgerStore};
use shared::{format_amount, Party, PartyKind};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const FIRST_ROW_Y: f32 = 245.0;
const ROW_HEIGHT: f32 = 7.0;
const BOTTOM_MARGIN: f32 = 20.0;
const MAX_NAME_CHARS: usize = 32;

const REGULAR_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const BOLD_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

/// Column x positions: name, phone, category, balance
const COLUMNS: [f32; 4] = [MARGIN_LEFT, 85.0, 125.0, 160.0];

/// Rows that fit below the header of a page
pub const ROWS_PER_PAGE: usize = ((FIRST_ROW_Y - BOTTOM_MARGIN) / ROW_HEIGHT) as usize;

#[derive(Clone)]
pub struct ReportService {
    store: LedgerStore,
}

impl ReportService {
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Render the report named by the export query (`customers` or `suppliers`)
    pub async fn render_named(&self, report_type: &str) -> Result<Vec<u8>, LedgerError> {
        let kind = PartyKind::from_plural(report_type)
            .ok_or_else(|| LedgerError::UnknownReportType(report_type.to_string()))?;
        self.render(kind).await
    }

    pub async fn render(&self, kind: PartyKind) -> Result<Vec<u8>, LedgerError> {
        let ledger = self.store.read().await?;
        let generated_on = Local::now().format("%Y-%m-%d").to_string();

        let bytes = render_report(&ledger, kind, &generated_on)?;
        info!(
            "Rendered {} report: {} rows, {} bytes",
            kind.plural(),
            ledger.parties(kind).len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Number of pages a report with `rows` parties occupies; never zero
pub fn page_count(rows: usize) -> usize {
    rows.div_ceil(ROWS_PER_PAGE).max(1)
}

fn report_title(kind: PartyKind) -> String {
    format!("{} Report", kind.label())
}

fn render_report(ledger: &Ledger, kind: PartyKind, generated_on: &str) -> Result<Vec<u8>> {
    let title = report_title(kind);
    let currency = &ledger.settings.currency;
    let parties = ledger.parties(kind);

    let (doc, page, layer) = PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let regular = load_font(&doc, REGULAR_FONT)?;
    let bold = load_font(&doc, BOLD_FONT)?;

    let pages = page_count(parties.len());
    let mut chunks = parties.chunks(ROWS_PER_PAGE);

    for page_number in 1..=pages {
        let current = if page_number == 1 {
            doc.get_page(page).get_layer(layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        write_header(&current, &bold, &regular, &ledger.settings.shop_name, &title, generated_on);

        let rows = chunks.next().unwrap_or(&[]);
        let mut y = FIRST_ROW_Y;
        for party in rows {
            write_row(&current, &regular, party, currency, y);
            y -= ROW_HEIGHT;
        }

        if page_number == pages {
            let total: f64 = parties.iter().map(|p| p.balance).sum();
            let total = (total * 100.0).round() / 100.0;
            current.use_text(
                format!("Total ({} {})", parties.len(), kind.plural()),
                11.0,
                Mm(COLUMNS[0]),
                Mm(y - 3.0),
                &bold,
            );
            // The currency may be non-Latin; only the regular face is relied on for it
            current.use_text(format_amount(total, currency), 11.0, Mm(COLUMNS[3]), Mm(y - 3.0), &regular);
        }

        current.use_text(
            format!("Page {} / {}", page_number, pages),
            8.0,
            Mm(PAGE_WIDTH - 40.0),
            Mm(10.0),
            &regular,
        );
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow!("Failed to write PDF report: {:?}", e))
}

fn load_font(doc: &PdfDocumentReference, bytes: &'static [u8]) -> Result<IndirectFontRef> {
    doc.add_external_font(bytes)
        .map_err(|e| anyhow!("Failed to load report font: {:?}", e))
}

fn write_header(
    layer: &PdfLayerReference,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    shop_name: &str,
    title: &str,
    generated_on: &str,
) {
    layer.use_text(shop_name, 18.0, Mm(MARGIN_LEFT), Mm(280.0), regular);
    layer.use_text(title, 14.0, Mm(MARGIN_LEFT), Mm(271.0), bold);
    layer.use_text(format!("Date: {}", generated_on), 10.0, Mm(MARGIN_LEFT), Mm(264.0), regular);

    let headings = ["Name", "Phone", "Category", "Balance"];
    for (heading, x) in headings.iter().zip(COLUMNS) {
        layer.use_text(*heading, 10.0, Mm(x), Mm(FIRST_ROW_Y + ROW_HEIGHT), bold);
    }
}

fn write_row(layer: &PdfLayerReference, font: &IndirectFontRef, party: &Party, currency: &str, y: f32) {
    let cells = [
        truncate(&party.name, MAX_NAME_CHARS),
        party.phone.clone(),
        party.category.clone(),
        format_amount(party.balance, currency),
    ];
    for (cell, x) in cells.into_iter().zip(COLUMNS) {
        layer.use_text(cell, 10.0, Mm(x), Mm(y), font);
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars - 3).collect();
    short.push_str("...");
    short
}
