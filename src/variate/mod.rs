pub mod nest;
pub mod patterns;
pub mod permute;
pub mod split;
pub mod table;

pub use nest::{flat, Flat, IntoCompound, Nestify, Strings};
pub use patterns::{patterns, Pattern, Patterned};
pub use permute::{permute_split, permute_splits, PermuteSplits};
pub use split::{sos_on, SplitTransform};
pub use table::{variation_table, Column, VariationTable};

use crate::error::Result;
use crate::transform::{Case, Transform};
use std::iter::FusedIterator;

/// Delimiter used for splitting and stitching unless told otherwise.
pub const DEFAULT_DELIMITER: &str = "_";

/// Output of [`variate_compounds`]: transform combinations, optionally
/// followed by component permutations.
#[derive(Debug, Clone)]
pub enum Variations<T> {
    Plain(SplitTransform<T>),
    Permuted(PermuteSplits<SplitTransform<T>>),
}

/// Generate variations of a compound string.
///
/// Without `permutate` this is [`sos_on`]. With it, the combinations are
/// stitched with `split_at` first so [`permute_splits`] can split them again,
/// and only the permuted output uses `stitch_with`.
///
/// ```
/// use strutils::{capitalize, variate_compounds};
///
/// let variated: Vec<String> = variate_compounds("variable_cost", capitalize, true, "_", " ")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(variated.len(), 8);
/// assert_eq!(variated[1], "cost variable");
/// ```
pub fn variate_compounds<T: Transform>(
    compound: impl Into<String>,
    using: T,
    permutate: bool,
    split_at: &str,
    stitch_with: &str,
) -> Variations<T> {
    if permutate {
        let sorred = sos_on(compound, using, split_at, split_at);
        return Variations::Permuted(permute_splits(sorred, stitch_with, split_at));
    }

    Variations::Plain(sos_on(compound, using, split_at, stitch_with))
}

/// [`variate_compounds`] with every default: capitalize, permutate, `_`.
pub fn variate(compound: impl Into<String>) -> Variations<Case> {
    variate_compounds(
        compound,
        Case::Capitalize,
        true,
        DEFAULT_DELIMITER,
        DEFAULT_DELIMITER,
    )
}

impl<T: Transform> Iterator for Variations<T> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Variations::Plain(sorred) => sorred.next(),
            Variations::Permuted(permuted) => permuted.next(),
        }
    }
}

impl<T: Transform> FusedIterator for Variations<T> {}
