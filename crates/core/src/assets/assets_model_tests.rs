//! Tests for record finalization and asset derivations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::assets::{
        apply_category_overrides, coerce_number, Asset, AssetRecord, CellValue,
        CATEGORY_EQUITY_MARGIN, CATEGORY_EQUITY_SPOT, CATEGORY_EQUITY_SPOT_DOMESTIC,
        CATEGORY_EQUITY_SPOT_FOREIGN, FIELD_CODE, FIELD_NAME, FIELD_ONE_DAY_CHANGE,
        FIELD_ONE_DAY_CHANGE_RATIO, FIELD_PROFIT, FIELD_VALUE,
    };
    use crate::errors::Error;

    fn finalized(record: AssetRecord) -> Asset {
        record.into_asset().unwrap()
    }

    #[test]
    fn missing_fields_take_their_zero_value() {
        let mut record = AssetRecord::new("投資信託");
        record.set_text(FIELD_NAME, "My Fund");

        let asset = finalized(record);

        assert_eq!(asset.category, "投資信託");
        assert_eq!(asset.name, "My Fund");
        assert_eq!(asset.code, "");
        assert_eq!(asset.financial_institution, "");
        assert_eq!(asset.quantity, 0.0);
        assert_eq!(asset.value, 0.0);
        assert_eq!(asset.profit, 0.0);
    }

    #[test]
    fn numeric_fields_are_coerced_from_cell_text() {
        let mut record = AssetRecord::new("投資信託");
        record.set_text(FIELD_VALUE, "¥1,234,567");
        record.set_text(FIELD_PROFIT, "-12,345");

        let asset = finalized(record);

        assert_eq!(asset.value, 1234567.0);
        assert_eq!(asset.profit, -12345.0);
    }

    #[test]
    fn margin_equity_value_is_rewritten_to_profit() {
        let mut record = AssetRecord::new(CATEGORY_EQUITY_MARGIN);
        record.set_text(FIELD_PROFIT, "500");
        record.set_text(FIELD_VALUE, "100");

        apply_category_overrides(&mut record);
        let asset = finalized(record);

        assert_eq!(asset.value, 500.0);
        assert_eq!(asset.profit, 500.0);
    }

    #[test]
    fn margin_override_without_profit_clears_the_value() {
        let mut record = AssetRecord::new(CATEGORY_EQUITY_MARGIN);
        record.set_text(FIELD_VALUE, "100");

        apply_category_overrides(&mut record);
        let asset = finalized(record);

        assert_eq!(asset.value, 0.0);
    }

    #[test]
    fn override_leaves_other_categories_alone() {
        let mut record = AssetRecord::new("投資信託");
        record.set_text(FIELD_PROFIT, "500");
        record.set_text(FIELD_VALUE, "100");

        apply_category_overrides(&mut record);
        let asset = finalized(record);

        assert_eq!(asset.value, 100.0);
    }

    #[test]
    fn all_digit_code_refines_spot_equity_as_domestic() {
        let mut record = AssetRecord::new(CATEGORY_EQUITY_SPOT);
        record.set_text(FIELD_CODE, "7203");

        assert_eq!(finalized(record).category, CATEGORY_EQUITY_SPOT_DOMESTIC);
    }

    #[test]
    fn all_uppercase_code_refines_spot_equity_as_foreign() {
        let mut record = AssetRecord::new(CATEGORY_EQUITY_SPOT);
        record.set_text(FIELD_CODE, "AAPL");

        assert_eq!(finalized(record).category, CATEGORY_EQUITY_SPOT_FOREIGN);
    }

    #[test]
    fn mixed_code_leaves_spot_equity_unrefined() {
        let mut record = AssetRecord::new(CATEGORY_EQUITY_SPOT);
        record.set_text(FIELD_CODE, "ABC123");

        assert_eq!(finalized(record).category, CATEGORY_EQUITY_SPOT);
    }

    #[test]
    fn code_patterns_do_not_touch_other_categories() {
        let mut record = AssetRecord::new("投資信託");
        record.set_text(FIELD_CODE, "7203");

        assert_eq!(finalized(record).category, "投資信託");
    }

    #[test]
    fn one_day_change_ratio_is_derived_from_previous_value() {
        let mut record = AssetRecord::new("投資信託");
        record.set_text(FIELD_VALUE, "1100");
        record.set_text(FIELD_ONE_DAY_CHANGE, "100");

        let asset = finalized(record);

        assert_eq!(asset.one_day_change_ratio, 0.1);
    }

    #[test]
    fn zero_previous_value_leaves_the_ratio_untouched() {
        let mut record = AssetRecord::new("投資信託");
        record.set_text(FIELD_VALUE, "100");
        record.set_text(FIELD_ONE_DAY_CHANGE, "100");

        let asset = finalized(record);

        assert_eq!(asset.one_day_change_ratio, 0.0);
    }

    #[test]
    fn unconvertible_value_fails_the_whole_record() {
        // The derived ratio field is never coerced, so text placed there
        // cannot be made to fit the target type.
        let mut record = AssetRecord::new("投資信託");
        record.set(FIELD_ONE_DAY_CHANGE_RATIO, CellValue::Text("n/a".into()));

        let err = record.into_asset().unwrap_err();
        assert!(matches!(err, Error::Conversion(_)));
    }

    #[test]
    fn coercion_is_idempotent() {
        let coerced = coerce_number(&CellValue::Text("¥1,234.5".into()));
        assert_eq!(coerce_number(&CellValue::Number(coerced)), coerced);
        assert_eq!(
            coerce_number(&CellValue::Text(format!("{coerced}"))),
            coerced
        );
    }

    proptest! {
        /// A numeric literal surrounded by arbitrary non-numeric noise
        /// always coerces to exactly that literal.
        #[test]
        fn coercion_extracts_embedded_literals(
            value in -1.0e9..1.0e9f64,
            prefix in "[¥$€%,a-zA-Z ]{0,8}",
            suffix in "[¥$€%,a-zA-Z ]{0,8}",
        ) {
            let noisy = format!("{prefix}{value}{suffix}");
            prop_assert_eq!(coerce_number(&CellValue::Text(noisy)), value);
        }
    }
}
