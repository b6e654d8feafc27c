use crate::error::{Result, VariationError};
use crate::transform::Transform;
use std::iter::FusedIterator;
use tracing::{debug, warn};

/// Lazy split/operate/stitch sequence returned by [`sos_on`].
///
/// Yields every combination of original and transformed components, with
/// the first component varying slowest and the original coming before the
/// transformed form at each position.
#[derive(Debug, Clone)]
pub struct SplitTransform<T> {
    compound: String,
    using: T,
    split_at: String,
    stitch_with: String,
    state: State,
}

#[derive(Debug, Clone)]
enum State {
    Pending,
    Combining {
        pairs: Vec<(String, String)>,
        choices: Vec<bool>,
    },
    Done,
}

/// Split `compound` at `split_at`, apply `using` to every component and
/// stitch each original/transformed combination back together with
/// `stitch_with`.
///
/// Nothing is computed until the first item is requested. A compound with
/// `n` components yields exactly `2^n` strings, duplicates included.
///
/// ```
/// use strutils::{capitalize, sos_on};
///
/// let variations: Vec<String> = sos_on("variable_cost", capitalize, "_", "_")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(
///     variations,
///     ["variable_cost", "variable_Cost", "Variable_cost", "Variable_Cost"]
/// );
/// ```
pub fn sos_on<T: Transform>(
    compound: impl Into<String>,
    using: T,
    split_at: &str,
    stitch_with: &str,
) -> SplitTransform<T> {
    SplitTransform {
        compound: compound.into(),
        using,
        split_at: split_at.to_string(),
        stitch_with: stitch_with.to_string(),
        state: State::Pending,
    }
}

impl<T: Transform> SplitTransform<T> {
    fn operate(&self) -> Result<Vec<(String, String)>> {
        if self.split_at.is_empty() {
            return Err(VariationError::empty_delimiter());
        }

        self.compound
            .split(self.split_at.as_str())
            .map(|component| {
                let operated = self.using.apply(component)?;
                Ok((component.to_string(), operated))
            })
            .collect()
    }
}

impl<T: Transform> Iterator for SplitTransform<T> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let State::Pending = self.state {
            match self.operate() {
                Ok(pairs) => {
                    debug!(compound = %self.compound, components = pairs.len(), "split compound");
                    let choices = vec![false; pairs.len()];
                    self.state = State::Combining { pairs, choices };
                }
                Err(e) => {
                    warn!(compound = %self.compound, error = %e, "split/operate failed");
                    self.state = State::Done;
                    return Some(Err(e));
                }
            }
        }

        match &mut self.state {
            State::Combining { pairs, choices } => {
                let stitched = stitch(pairs, choices, &self.stitch_with);
                if !advance(choices) {
                    self.state = State::Done;
                }
                Some(Ok(stitched))
            }
            _ => None,
        }
    }
}

impl<T: Transform> FusedIterator for SplitTransform<T> {}

fn stitch(pairs: &[(String, String)], choices: &[bool], stitch_with: &str) -> String {
    pairs
        .iter()
        .zip(choices)
        .map(|((original, operated), &use_operated)| {
            if use_operated {
                operated.as_str()
            } else {
                original.as_str()
            }
        })
        .collect::<Vec<_>>()
        .join(stitch_with)
}

/// Step to the next combination, last position fastest. Returns false once
/// every combination has been produced.
fn advance(choices: &mut [bool]) -> bool {
    for choice in choices.iter_mut().rev() {
        if *choice {
            *choice = false;
        } else {
            *choice = true;
            return true;
        }
    }
    false
}
