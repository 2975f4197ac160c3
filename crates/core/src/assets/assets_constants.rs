/// Canonical field identifiers
///
/// Table columns are mapped onto these names, and they double as the wire
/// names of the Asset fields (serde camelCase) and as sample label keys in
/// the exposition output.

pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_CODE: &str = "code";
pub const FIELD_NAME: &str = "name";
pub const FIELD_QUANTITY: &str = "quantity";
pub const FIELD_UNIT_PRICE: &str = "unitPrice";
pub const FIELD_AVERAGE_COST: &str = "averageCost";
pub const FIELD_TOTAL_COST: &str = "totalCost";
pub const FIELD_VALUE: &str = "value";
pub const FIELD_ONE_DAY_CHANGE: &str = "oneDayChange";
pub const FIELD_ONE_DAY_CHANGE_RATIO: &str = "oneDayChangeRatio";
pub const FIELD_PROFIT: &str = "profit";
pub const FIELD_PROFIT_RATIO: &str = "profitRatio";
pub const FIELD_FINANCIAL_INSTITUTION: &str = "financialInstitution";

/// Fields coerced to numbers before record conversion.
///
/// `oneDayChangeRatio` is deliberately absent: it is derived after
/// conversion and never sourced from the document.
pub const NUMERIC_FIELDS: [&str; 8] = [
    FIELD_QUANTITY,
    FIELD_UNIT_PRICE,
    FIELD_AVERAGE_COST,
    FIELD_TOTAL_COST,
    FIELD_VALUE,
    FIELD_ONE_DAY_CHANGE,
    FIELD_PROFIT,
    FIELD_PROFIT_RATIO,
];

/// Category names as they appear in the page section headings

/// Spot (cash) equity holdings.
pub const CATEGORY_EQUITY_SPOT: &str = "株式（現物）";

/// Margin-traded equity. For this category the page reports no meaningful
/// valuation, so the profit column is carried over as the value.
pub const CATEGORY_EQUITY_MARGIN: &str = "株式（信用）";

/// Spot equity refined as domestic (all-digit security code).
pub const CATEGORY_EQUITY_SPOT_DOMESTIC: &str = "株式（現物） - 日本";

/// Spot equity refined as foreign (all-uppercase ticker).
pub const CATEGORY_EQUITY_SPOT_FOREIGN: &str = "株式（現物） - 米国";
