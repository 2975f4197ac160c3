/// Section id prefix marking one asset-category block in the portfolio page
pub const PORTFOLIO_SECTION_ID_PREFIX: &str = "portfolio_det";

/// Name prefix shared by every exposed metric family
pub const METRIC_NAME_PREFIX: &str = "mf_asset_";
