use crate::error::{Result, VariationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// A per-component mapping applied by the split/operate/stitch stage.
///
/// Any `Fn(&str) -> String` is a transform. Fallible closures go through
/// [`fallible`].
pub trait Transform {
    fn apply(&self, component: &str) -> Result<String>;
}

impl<F> Transform for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, component: &str) -> Result<String> {
        Ok(self(component))
    }
}

/// Uppercase the first grapheme cluster and lowercase the rest.
///
/// Full uppercase mapping is used, not titlecase: `"ßa"` becomes `"SSa"`
/// and `"ǆemal"` becomes `"Ǆemal"`.
pub fn capitalize(component: &str) -> String {
    let mut graphemes = component.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut capitalized = first.to_uppercase();
            capitalized.push_str(&graphemes.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

/// Built-in transforms, selectable by name from the CLI and config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Capitalize,
    Upper,
    Lower,
    Identity,
}

impl Transform for Case {
    fn apply(&self, component: &str) -> Result<String> {
        Ok(match self {
            Case::Capitalize => capitalize(component),
            Case::Upper => component.to_uppercase(),
            Case::Lower => component.to_lowercase(),
            Case::Identity => component.to_string(),
        })
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "capitalize" => Ok(Case::Capitalize),
            "upper" => Ok(Case::Upper),
            "lower" => Ok(Case::Lower),
            "identity" | "none" => Ok(Case::Identity),
            _ => Err(format!("Unknown transform: {}", s)),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Capitalize => write!(f, "capitalize"),
            Case::Upper => write!(f, "upper"),
            Case::Lower => write!(f, "lower"),
            Case::Identity => write!(f, "identity"),
        }
    }
}

/// Transform backed by a closure that may reject a component.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Wrap a fallible closure so its errors surface as
/// [`VariationError::InvalidTransform`].
pub fn fallible<F, E>(f: F) -> Fallible<F, E>
where
    F: Fn(&str) -> std::result::Result<String, E>,
    E: fmt::Display,
{
    Fallible {
        f,
        _error: PhantomData,
    }
}

impl<F, E> Transform for Fallible<F, E>
where
    F: Fn(&str) -> std::result::Result<String, E>,
    E: fmt::Display,
{
    fn apply(&self, component: &str) -> Result<String> {
        (self.f)(component).map_err(|e| VariationError::InvalidTransform {
            component: component.to_string(),
            reason: e.to_string(),
        })
    }
}
