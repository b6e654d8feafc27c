use crate::error::{Result, VariationError};
use crate::variate::nest::{Nestify, Strings};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Lazy permutation sequence returned by [`permute_splits`].
#[derive(Debug, Clone)]
pub struct PermuteSplits<S> {
    strings: S,
    stitch_with: String,
    split_at: String,
    current: Option<Orderings>,
    done: bool,
}

/// Split every input string at `split_at` and yield each ordering of its
/// components, stitched with `stitch_with`.
///
/// Strings without a delimiter are passed through unchanged. Orderings
/// follow lexicographic order of component positions, starting with the
/// identity.
///
/// ```
/// use strutils::permute_splits;
///
/// let permuted: Vec<String> = permute_splits(vec!["variable_cost", "Variable_cost"], "_", "_")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(
///     permuted,
///     ["variable_cost", "cost_variable", "Variable_cost", "cost_Variable"]
/// );
/// ```
pub fn permute_splits<N: Nestify>(
    strings: N,
    stitch_with: &str,
    split_at: &str,
) -> PermuteSplits<N::Strings> {
    PermuteSplits {
        strings: strings.nestify(),
        stitch_with: stitch_with.to_string(),
        split_at: split_at.to_string(),
        current: None,
        done: false,
    }
}

/// Permute the components of a single compound string.
pub fn permute_split(
    string: impl Into<String>,
    stitch_with: &str,
    split_at: &str,
) -> PermuteSplits<Strings<std::iter::Empty<String>>> {
    permute_splits(string.into(), stitch_with, split_at)
}

impl<S> Iterator for PermuteSplits<S>
where
    S: Iterator<Item = Result<String>>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(orderings) = self.current.as_mut() {
                if let Some(stitched) = orderings.next_stitched(&self.stitch_with) {
                    return Some(Ok(stitched));
                }
                self.current = None;
            }

            let string = match self.strings.next() {
                Some(Ok(string)) => string,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            if self.split_at.is_empty() {
                self.done = true;
                return Some(Err(VariationError::empty_delimiter()));
            }

            let components: Vec<String> = string
                .split(self.split_at.as_str())
                .map(str::to_string)
                .collect();

            if components.len() < 2 {
                trace!(string = %string, "non-compound string, passing through");
                return Some(Ok(string));
            }

            debug!(string = %string, components = components.len(), "permuting components");
            self.current = Some(Orderings::new(components));
        }
    }
}

impl<S> FusedIterator for PermuteSplits<S> where S: Iterator<Item = Result<String>> {}

/// Every ordering of one component sequence.
#[derive(Debug, Clone)]
struct Orderings {
    components: Vec<String>,
    indices: Option<Vec<usize>>,
}

impl Orderings {
    fn new(components: Vec<String>) -> Self {
        let indices = (0..components.len()).collect();
        Self {
            components,
            indices: Some(indices),
        }
    }

    fn next_stitched(&mut self, stitch_with: &str) -> Option<String> {
        let indices = self.indices.as_mut()?;
        let stitched = indices
            .iter()
            .map(|&i| self.components[i].as_str())
            .collect::<Vec<_>>()
            .join(stitch_with);

        if !next_permutation(indices) {
            self.indices = None;
        }

        Some(stitched)
    }
}

/// Rearrange `indices` into the next permutation in lexicographic order.
/// Returns false when `indices` is already the last one.
fn next_permutation(indices: &mut [usize]) -> bool {
    let Some(pivot) = indices.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };

    // A successor always exists: indices[pivot + 1] is larger.
    let successor = indices
        .iter()
        .rposition(|&i| i > indices[pivot])
        .unwrap_or(pivot + 1);

    indices.swap(pivot, successor);
    indices[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variate::nest::flat;

    fn collect<S: Iterator<Item = Result<String>>>(sequence: PermuteSplits<S>) -> Vec<String> {
        sequence.collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_permute_single_compound() {
        assert_eq!(
            collect(permute_splits("variable_cost", "_", "_")),
            vec!["variable_cost", "cost_variable"]
        );
    }

    #[test]
    fn test_non_compound_passthrough() {
        assert_eq!(collect(permute_splits("variable", "_", "_")), vec!["variable"]);
        assert_eq!(collect(permute_split("variable", " ", "_")), vec!["variable"]);
    }

    #[test]
    fn test_each_string_in_order() {
        assert_eq!(
            collect(permute_splits(vec!["variable_cost", "Variable_cost"], "_", "_")),
            vec!["variable_cost", "cost_variable", "Variable_cost", "cost_Variable"]
        );
    }

    #[test]
    fn test_three_components_lexicographic() {
        assert_eq!(
            collect(permute_split("a_b_c", "-", "_")),
            vec!["a-b-c", "a-c-b", "b-a-c", "b-c-a", "c-a-b", "c-b-a"]
        );
    }

    #[test]
    fn test_repeated_components_are_not_deduplicated() {
        assert_eq!(
            collect(permute_split("a_a", "_", "_")),
            vec!["a_a", "a_a"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(collect(permute_splits(Vec::<String>::new(), "_", "_")).is_empty());
    }

    #[test]
    fn test_upstream_error_stops_sequence() {
        let err = VariationError::InvalidTransform {
            component: "cost".to_string(),
            reason: "boom".to_string(),
        };
        let mut sequence = permute_splits(
            vec![Ok("a_b".to_string()), Err(err.clone()), Ok("c_d".to_string())],
            "_",
            "_",
        );
        assert_eq!(sequence.next(), Some(Ok("a_b".to_string())));
        assert_eq!(sequence.next(), Some(Ok("b_a".to_string())));
        assert_eq!(sequence.next(), Some(Err(err)));
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn test_empty_split_delimiter() {
        let mut sequence = permute_split("a_b", "_", "");
        assert!(matches!(
            sequence.next(),
            Some(Err(VariationError::MalformedInput { .. }))
        ));
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn test_unbounded_input_streams() {
        let first: Vec<_> = permute_splits(flat(std::iter::repeat("x_y")), "_", "_")
            .take(3)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(first, vec!["x_y", "y_x", "x_y"]);
    }

    #[test]
    fn test_next_permutation() {
        let mut indices = [0, 1];
        assert!(next_permutation(&mut indices));
        assert_eq!(indices, [1, 0]);
        assert!(!next_permutation(&mut indices));
        assert!(!next_permutation(&mut []));
    }
}
