use crate::error::{Result, VariationError};
use std::fmt;
use std::iter::FusedIterator;
use unicode_segmentation::UnicodeSegmentation;

/// Shapes a two-part compound can be abbreviated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `first`
    First,
    /// `second`
    Second,
    /// `first.second`
    Full,
    /// `f.second`
    AbbreviatedFirst,
    /// `first.s`
    AbbreviatedSecond,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::First,
        Pattern::Second,
        Pattern::Full,
        Pattern::AbbreviatedFirst,
        Pattern::AbbreviatedSecond,
    ];

    pub fn render(self, first: &str, stitch_with: &str, second: &str) -> String {
        match self {
            Pattern::First => first.to_string(),
            Pattern::Second => second.to_string(),
            Pattern::Full => format!("{}{}{}", first, stitch_with, second),
            Pattern::AbbreviatedFirst => format!("{}{}{}", initial(first), stitch_with, second),
            Pattern::AbbreviatedSecond => format!("{}{}{}", first, stitch_with, initial(second)),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::First => write!(f, "first"),
            Pattern::Second => write!(f, "second"),
            Pattern::Full => write!(f, "first.second"),
            Pattern::AbbreviatedFirst => write!(f, "f.second"),
            Pattern::AbbreviatedSecond => write!(f, "first.s"),
        }
    }
}

fn initial(component: &str) -> &str {
    component.graphemes(true).next().unwrap_or("")
}

/// Lazy sequence returned by [`patterns`].
#[derive(Debug, Clone)]
pub struct Patterned {
    compound: String,
    split_at: String,
    stitch_with: String,
    position: usize,
    done: bool,
}

/// Render `compound` through every [`Pattern`], splitting once at the first
/// `split_at`. A compound without the delimiter yields only itself.
pub fn patterns(compound: impl Into<String>, split_at: &str, stitch_with: &str) -> Patterned {
    Patterned {
        compound: compound.into(),
        split_at: split_at.to_string(),
        stitch_with: stitch_with.to_string(),
        position: 0,
        done: false,
    }
}

impl Iterator for Patterned {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.split_at.is_empty() {
            self.done = true;
            return Some(Err(VariationError::empty_delimiter()));
        }

        match self.compound.split_once(self.split_at.as_str()) {
            None => {
                self.done = true;
                Some(Ok(std::mem::take(&mut self.compound)))
            }
            Some((first, second)) => {
                let Some(pattern) = Pattern::ALL.get(self.position) else {
                    self.done = true;
                    return None;
                };
                self.position += 1;
                Some(Ok(pattern.render(first, &self.stitch_with, second)))
            }
        }
    }
}

impl FusedIterator for Patterned {}
