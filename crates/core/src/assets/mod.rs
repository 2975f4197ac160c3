//! Assets module - domain model, column mapping, and record finalization.

mod assets_constants;
mod assets_model;

#[cfg(test)]
mod assets_model_tests;

// Re-export the public interface
pub use assets_constants::*;
pub use assets_model::{
    apply_category_overrides, coerce_number, column_to_field, Asset, AssetRecord, CellValue,
};
