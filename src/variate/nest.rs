//! Normalizes "one string or a flat collection of strings" into a single
//! level stream. Containers are never flattened recursively.

use crate::error::Result;
use crate::transform::Transform;
use crate::variate::split::SplitTransform;

/// An item that can stand in for one compound string.
pub trait IntoCompound {
    fn into_compound(self) -> Result<String>;
}

impl IntoCompound for String {
    fn into_compound(self) -> Result<String> {
        Ok(self)
    }
}

impl<T: AsRef<str> + ?Sized> IntoCompound for &T {
    fn into_compound(self) -> Result<String> {
        Ok(self.as_ref().to_string())
    }
}

// Upstream stages report failures in-band; pass them through untouched.
impl IntoCompound for Result<String> {
    fn into_compound(self) -> Result<String> {
        self
    }
}

/// One level of compound strings.
#[derive(Debug, Clone)]
pub enum Strings<I> {
    One(Option<String>),
    Many(I),
}

impl<I> Iterator for Strings<I>
where
    I: Iterator,
    I::Item: IntoCompound,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Strings::One(single) => single.take().map(Ok),
            Strings::Many(strings) => strings.next().map(IntoCompound::into_compound),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Strings::One(single) => {
                let n = usize::from(single.is_some());
                (n, Some(n))
            }
            Strings::Many(strings) => strings.size_hint(),
        }
    }
}

/// Input shapes accepted by [`permute_splits`](crate::variate::permute_splits).
pub trait Nestify {
    type Strings: Iterator<Item = Result<String>>;

    fn nestify(self) -> Self::Strings;
}

type Single = Strings<std::iter::Empty<String>>;

impl Nestify for &str {
    type Strings = Single;

    fn nestify(self) -> Single {
        Strings::One(Some(self.to_string()))
    }
}

impl Nestify for String {
    type Strings = Single;

    fn nestify(self) -> Single {
        Strings::One(Some(self))
    }
}

impl Nestify for &String {
    type Strings = Single;

    fn nestify(self) -> Single {
        Strings::One(Some(self.clone()))
    }
}

impl<S: IntoCompound> Nestify for Vec<S> {
    type Strings = Strings<std::vec::IntoIter<S>>;

    fn nestify(self) -> Self::Strings {
        Strings::Many(self.into_iter())
    }
}

impl<S: IntoCompound, const N: usize> Nestify for [S; N] {
    type Strings = Strings<std::array::IntoIter<S, N>>;

    fn nestify(self) -> Self::Strings {
        Strings::Many(self.into_iter())
    }
}

impl<'a, S> Nestify for &'a [S]
where
    &'a S: IntoCompound,
{
    type Strings = Strings<std::slice::Iter<'a, S>>;

    fn nestify(self) -> Self::Strings {
        Strings::Many(self.iter())
    }
}

// Already a one-level stream.
impl<T: Transform> Nestify for SplitTransform<T> {
    type Strings = Self;

    fn nestify(self) -> Self {
        self
    }
}

/// Any iterator of strings, possibly unbounded, consumed one item at a time.
#[derive(Debug, Clone)]
pub struct Flat<I>(I);

/// Mark an iterator as an already-flat stream of compound strings.
pub fn flat<I: IntoIterator>(strings: I) -> Flat<I::IntoIter> {
    Flat(strings.into_iter())
}

impl<I> Nestify for Flat<I>
where
    I: Iterator,
    I::Item: IntoCompound,
{
    type Strings = Strings<I>;

    fn nestify(self) -> Self::Strings {
        Strings::Many(self.0)
    }
}
