pub mod cli;
pub mod config;
pub mod error;
pub mod transform;
pub mod variate;

pub use config::Config;
pub use error::VariationError;
pub use transform::{capitalize, fallible, Case, Transform};
pub use variate::{
    flat, patterns, permute_split, permute_splits, sos_on, variate, variate_compounds,
    variation_table, Nestify, Pattern, Variations, VariationTable, DEFAULT_DELIMITER,
};

use serde::Serialize;

/// The variations generated for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariationGroup {
    pub input: String,
    pub variations: Vec<String>,
}
