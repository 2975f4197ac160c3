//! Asset domain model and scraped-record finalization.

use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use log::{error, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::assets::assets_constants::*;
use crate::errors::{Error, Result};

lazy_static! {
    /// Everything that is not part of a numeric literal, for stripping
    /// currency symbols, separators, and unit suffixes before parsing.
    static ref NON_NUMERIC_REGEX: Regex =
        Regex::new(r"[^0-9.\-]+").expect("Invalid regex pattern");

    /// All-digit security code, marking a domestic listing.
    static ref DOMESTIC_CODE_REGEX: Regex =
        Regex::new(r"^[0-9]+$").expect("Invalid regex pattern");

    /// All-uppercase ticker, marking a foreign listing.
    static ref FOREIGN_CODE_REGEX: Regex =
        Regex::new(r"^[A-Z]+$").expect("Invalid regex pattern");

    /// Column label -> canonical field identifier. Exhaustive for the
    /// fixed reporting layout; an empty identifier marks a column that is
    /// recognised but intentionally not extracted.
    static ref COLUMN_FIELD_TABLE: HashMap<&'static str, &'static str> = HashMap::from([
        ("銘柄コード", FIELD_CODE),
        ("種類・名称", FIELD_NAME),
        ("銘柄名", FIELD_NAME),
        ("名称", FIELD_NAME),
        ("保有数", FIELD_QUANTITY),
        ("ポイント・マイル数", FIELD_QUANTITY),
        ("現在値", FIELD_UNIT_PRICE),
        ("基準価額", FIELD_UNIT_PRICE),
        ("換算レート", FIELD_UNIT_PRICE),
        ("平均取得単価", FIELD_AVERAGE_COST),
        ("取得価額", FIELD_TOTAL_COST),
        ("残高", FIELD_VALUE),
        ("評価額", FIELD_VALUE),
        ("現在価値", FIELD_VALUE),
        ("現在の価値", FIELD_VALUE),
        ("前日比", FIELD_ONE_DAY_CHANGE),
        ("評価損益", FIELD_PROFIT),
        ("評価損益率", FIELD_PROFIT_RATIO),
        ("保有金融機関", FIELD_FINANCIAL_INSTITUTION),
        ("種類", ""),
        ("取得日", ""),
        ("有効期限", ""),
        ("変更", ""),
        ("削除", ""),
    ]);
}

/// One scraped table cell, prior to type validation.
///
/// Records hold either the raw cell text or an already-coerced number;
/// serialized untagged so a record round-trips as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

/// Domain model representing one financial holding.
///
/// Field wire names are the canonical identifiers (camelCase); fields a
/// record does not carry default to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    pub category: String,
    pub code: String,
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub average_cost: f64,
    pub total_cost: f64,
    pub value: f64,
    pub one_day_change: f64,
    /// Derived, never sourced from the document.
    pub one_day_change_ratio: f64,
    pub profit: f64,
    pub profit_ratio: f64,
    pub financial_institution: String,
}

impl Asset {
    /// Post-conversion adjustments: refine spot equity by code pattern and
    /// derive the one-day change ratio from the previous day's value.
    pub(crate) fn normalize(&mut self) {
        if self.category == CATEGORY_EQUITY_SPOT {
            if DOMESTIC_CODE_REGEX.is_match(&self.code) {
                self.category = CATEGORY_EQUITY_SPOT_DOMESTIC.to_string();
            } else if FOREIGN_CODE_REGEX.is_match(&self.code) {
                self.category = CATEGORY_EQUITY_SPOT_FOREIGN.to_string();
            }
        }

        if self.value - self.one_day_change != 0.0 {
            self.one_day_change_ratio = self.one_day_change / (self.value - self.one_day_change);
        }
    }
}

/// Intermediate representation of one extracted table row: canonical field
/// identifier to untyped cell value. Created fresh per row, discarded after
/// conversion.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct AssetRecord(BTreeMap<&'static str, CellValue>);

impl AssetRecord {
    /// Creates a record seeded with the section's category name.
    pub fn new(category: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(FIELD_CATEGORY, CellValue::Text(category.to_string()));
        Self(fields)
    }

    pub fn set(&mut self, field: &'static str, value: CellValue) {
        self.0.insert(field, value);
    }

    pub fn set_text(&mut self, field: &'static str, text: impl Into<String>) {
        self.set(field, CellValue::Text(text.into()));
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.0.get(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<CellValue> {
        self.0.remove(field)
    }

    /// Finalizes the record into a typed [`Asset`].
    ///
    /// Coerces the numeric field set in place, then performs a strict
    /// structural conversion: fields absent from the record take their zero
    /// value, and a value that cannot be placed into its target field's
    /// type fails the whole record rather than being truncated silently.
    pub fn into_asset(mut self) -> Result<Asset> {
        for field in NUMERIC_FIELDS {
            if let Some(value) = self.0.get(field) {
                let number = coerce_number(value);
                self.0.insert(field, CellValue::Number(number));
            }
        }

        let json = serde_json::to_value(&self)
            .map_err(|err| Error::Conversion(format!("{:?}: {err}", self.0)))?;
        let mut asset: Asset = serde_json::from_value(json)
            .map_err(|err| Error::Conversion(format!("{:?}: {err}", self.0)))?;

        asset.normalize();

        Ok(asset)
    }
}

/// Category-specific field rewrites, applied to a record before it is
/// finalized. For margin-traded equity the page reports no usable
/// valuation, so the value is always rewritten to the profit column.
pub fn apply_category_overrides(record: &mut AssetRecord) {
    let is_margin = matches!(
        record.get(FIELD_CATEGORY),
        Some(CellValue::Text(category)) if category == CATEGORY_EQUITY_MARGIN
    );
    if is_margin {
        match record.get(FIELD_PROFIT).cloned() {
            Some(profit) => record.set(FIELD_VALUE, profit),
            None => {
                record.remove(FIELD_VALUE);
            }
        }
    }
}

/// Maps a trimmed column label to its canonical field identifier.
///
/// Returns the empty identifier for columns that are recognised but not
/// extracted, and None (after a warning) for labels absent from the table;
/// the caller skips that column for every row.
pub fn column_to_field(label: &str) -> Option<&'static str> {
    let field = COLUMN_FIELD_TABLE.get(label).copied();
    if field.is_none() {
        warn!("Unknown column label {label:?}, dropping column");
    }
    field
}

/// Normalizes one untyped scalar into a float.
///
/// Numbers pass through unchanged. Text is stripped of every character
/// that cannot be part of a numeric literal (currency symbols, thousands
/// separators, percent signs, unit suffixes) and parsed; text with no
/// parsable remainder is reported and coerced to zero.
pub fn coerce_number(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(number) => *number,
        CellValue::Text(text) => {
            let cleaned = NON_NUMERIC_REGEX.replace_all(text, "");
            match cleaned.parse::<f64>() {
                Ok(number) => number,
                Err(err) => {
                    error!("Failed to coerce {text:?} to a number: {err}");
                    0.0
                }
            }
        }
    }
}
