//! Gauge exposition rendering.
//!
//! One metric family per numeric asset attribute, one sample per asset.
//! Families are built as protocol metric families and rendered one at a
//! time with the text encoder, which pins family order to the declaration
//! list below and sample order to the asset list.

use prometheus::proto::{Gauge, LabelPair, Metric, MetricFamily, MetricType};
use prometheus::TextEncoder;

use crate::assets::Asset;
use crate::constants::METRIC_NAME_PREFIX;
use crate::errors::{Error, Result};

/// Numeric asset attributes in exposition order.
const FAMILIES: [(&str, fn(&Asset) -> f64); 9] = [
    ("quantity", |asset| asset.quantity),
    ("unit_price", |asset| asset.unit_price),
    ("average_cost", |asset| asset.average_cost),
    ("total_cost", |asset| asset.total_cost),
    ("value", |asset| asset.value),
    ("one_day_change", |asset| asset.one_day_change),
    ("one_day_change_ratio", |asset| asset.one_day_change_ratio),
    ("profit", |asset| asset.profit),
    ("profit_ratio", |asset| asset.profit_ratio),
];

/// Renders the full exposition document for an extracted portfolio.
pub fn generate_metrics(assets: &[Asset]) -> Result<String> {
    let labels: Vec<Vec<(&'static str, String)>> = assets.iter().map(asset_labels).collect();

    let mut exposition = String::new();
    for (attribute, read) in FAMILIES {
        let values: Vec<f64> = assets.iter().map(read).collect();
        let name = format!("{METRIC_NAME_PREFIX}{attribute}");
        exposition.push_str(&encode_gauge_family(&name, "", &values, &labels)?);
    }

    Ok(exposition)
}

/// Renders one gauge family in the text exposition format, with one sample
/// per value and the label set of the same index.
pub fn encode_gauge_family(
    name: &str,
    help: &str,
    values: &[f64],
    labels: &[Vec<(&'static str, String)>],
) -> Result<String> {
    if values.is_empty() {
        return Ok(String::new());
    }

    let mut family = MetricFamily::new();
    family.set_name(name.to_string());
    family.set_help(help.to_string());
    family.set_field_type(MetricType::GAUGE);

    for (index, value) in values.iter().enumerate() {
        let mut metric = Metric::new();
        if let Some(pairs) = labels.get(index) {
            for (label_name, label_value) in pairs {
                let mut pair = LabelPair::new();
                pair.set_name((*label_name).to_string());
                pair.set_value(label_value.clone());
                metric.mut_label().push(pair);
            }
        }
        let mut gauge = Gauge::new();
        gauge.set_value(*value);
        metric.set_gauge(gauge);
        family.mut_metric().push(metric);
    }

    let mut buf = String::new();
    TextEncoder::new()
        .encode_utf8(&[family], &mut buf)
        .map_err(|err| Error::Exposition(err.to_string()))?;

    Ok(buf)
}

/// The per-sample label set: the descriptive fields raw, plus one
/// human-readable label per numeric attribute. The change ratio label is
/// scaled to percent before formatting.
fn asset_labels(asset: &Asset) -> Vec<(&'static str, String)> {
    vec![
        ("category", asset.category.clone()),
        ("code", asset.code.clone()),
        ("name", asset.name.clone()),
        ("financialInstitution", asset.financial_institution.clone()),
        ("quantity", format!("quantity: {}", asset.quantity)),
        ("unitPrice", format!("unitPrice: {}", asset.unit_price)),
        ("averageCost", format!("avgCost: {}", asset.average_cost)),
        ("totalCost", format!("cost: {}", asset.total_cost)),
        ("value", format!("value: {}", asset.value)),
        ("oneDayChange", format!("change: {}", asset.one_day_change)),
        (
            "oneDayChangeRatio",
            format!("change%: {}", 100.0 * asset.one_day_change_ratio),
        ),
        ("profit", format!("profit: {}", asset.profit)),
        ("profitRatio", format!("profit%: {}", asset.profit_ratio)),
    ]
}
