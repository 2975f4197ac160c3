//! Walks the portfolio document and extracts one typed asset per table row.
//!
//! The page is organised as section blocks, one per asset category, each
//! holding one or more tables whose first row is the column header. Header
//! labels map to canonical fields by position; a row that fails
//! finalization is logged and skipped so a single bad row never aborts the
//! run.

use lazy_static::lazy_static;
use log::{debug, error};
use scraper::{ElementRef, Html, Selector};

use crate::assets::{apply_category_overrides, column_to_field, Asset, AssetRecord};
use crate::constants::PORTFOLIO_SECTION_ID_PREFIX;
use crate::errors::{Error, Result};
use crate::metrics::generate_metrics;

lazy_static! {
    static ref SECTION_SELECTOR: Selector = Selector::parse(&format!(
        r#"section[id^="{PORTFOLIO_SECTION_ID_PREFIX}"]"#
    ))
    .expect("Invalid selector");
    static ref HEADING_SELECTOR: Selector = Selector::parse("h1").expect("Invalid selector");
    static ref TABLE_SELECTOR: Selector = Selector::parse("table").expect("Invalid selector");
    static ref ROW_SELECTOR: Selector = Selector::parse("tr").expect("Invalid selector");
    static ref HEADER_CELL_SELECTOR: Selector = Selector::parse("th").expect("Invalid selector");
    static ref DATA_CELL_SELECTOR: Selector = Selector::parse("td").expect("Invalid selector");
}

/// Full pipeline: document text in, exposition text out.
///
/// Fails with [`Error::EmptyPortfolio`] when the document yields no assets
/// at all, the one condition the caller must treat as fatal.
pub fn export_portfolio(html: &str) -> Result<String> {
    let portfolio = extract_assets(html);
    if portfolio.is_empty() {
        return Err(Error::EmptyPortfolio);
    }

    generate_metrics(&portfolio)
}

/// Extracts every asset the document contains, in document order.
pub fn extract_assets(html: &str) -> Vec<Asset> {
    let document = Html::parse_document(html);
    let mut portfolio = Vec::new();

    for section in document.select(&SECTION_SELECTOR) {
        let category = section
            .select(&HEADING_SELECTOR)
            .next()
            .map(collect_text)
            .unwrap_or_default();
        debug!("Extracting category {category:?}");

        for table in section.select(&TABLE_SELECTOR) {
            extract_table(table, &category, &mut portfolio);
        }
    }

    portfolio
}

fn extract_table(table: ElementRef, category: &str, portfolio: &mut Vec<Asset>) {
    let rows: Vec<ElementRef> = table.select(&ROW_SELECTOR).collect();
    let Some((header, data_rows)) = rows.split_first() else {
        return;
    };

    let fields: Vec<Option<&'static str>> = header
        .select(&HEADER_CELL_SELECTOR)
        .map(|cell| column_to_field(&collect_text(cell)))
        .collect();

    for row in data_rows {
        let mut record = AssetRecord::new(category);
        for (index, cell) in row.select(&DATA_CELL_SELECTOR).enumerate() {
            // Cells beyond the header list and cells under a dropped or
            // ignored column are left unset.
            match fields.get(index) {
                Some(Some(field)) if !field.is_empty() => {
                    record.set_text(*field, collect_text(cell));
                }
                _ => {}
            }
        }

        apply_category_overrides(&mut record);

        match record.into_asset() {
            Ok(asset) => portfolio.push(asset),
            Err(err) => error!("Skipping row: {err}"),
        }
    }
}

fn collect_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
