//! Extractors: how a detector reads an item.
//!
//! Detectors treat items as opaque. Everything they compare comes from an
//! [`Extractor`], which maps an item to its primary value and, optionally,
//! an auxiliary attribute. This keeps the engine polymorphic over item
//! representations (pairs, records, domain structs) without inheritance.

use crate::value::{Element, Scalar};
use num_rational::Ratio;
use std::fmt;
use std::marker::PhantomData;

/// Auxiliary attribute of an item.
///
/// `Absent` is its own marker and never collides with a real value, so an
/// aux domain that contains null-like values stays unambiguous. Two absent
/// attributes compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aux<A> {
    #[default]
    Absent,
    Present(A),
}

impl<A> Aux<A> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Aux::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn as_ref(&self) -> Aux<&A> {
        match self {
            Aux::Absent => Aux::Absent,
            Aux::Present(a) => Aux::Present(a),
        }
    }

    /// Convert into an `Option`, losing the distinction from a present `None`
    pub fn present(self) -> Option<A> {
        match self {
            Aux::Absent => None,
            Aux::Present(a) => Some(a),
        }
    }
}

impl<A> From<Option<A>> for Aux<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Some(a) => Aux::Present(a),
            None => Aux::Absent,
        }
    }
}

impl<A: fmt::Display> fmt::Display for Aux<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aux::Absent => write!(f, "-"),
            Aux::Present(a) => write!(f, "{}", a),
        }
    }
}

/// Reads the primary value and auxiliary attribute of an item.
///
/// Implementations must be pure: detectors call them repeatedly on the same
/// item and expect the same answer.
pub trait Extractor<I: ?Sized> {
    type Value;
    type Aux;

    fn value_of(&self, item: &I) -> Self::Value;

    fn aux_of(&self, item: &I) -> Aux<Self::Aux>;
}

impl<I: ?Sized, E: Extractor<I> + ?Sized> Extractor<I> for &E {
    type Value = E::Value;
    type Aux = E::Aux;

    fn value_of(&self, item: &I) -> Self::Value {
        (**self).value_of(item)
    }

    fn aux_of(&self, item: &I) -> Aux<Self::Aux> {
        (**self).aux_of(item)
    }
}

/// The default extractor.
///
/// - a pair `(value, aux)` yields its first element and `Present(second)`
/// - a bare value yields itself and `Absent`
/// - an [`Element`] dispatches on its variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Defaults;

impl<V: Clone, A: Clone> Extractor<(V, A)> for Defaults {
    type Value = V;
    type Aux = A;

    fn value_of(&self, item: &(V, A)) -> V {
        item.0.clone()
    }

    fn aux_of(&self, item: &(V, A)) -> Aux<A> {
        Aux::Present(item.1.clone())
    }
}

impl Extractor<Element> for Defaults {
    type Value = Scalar;
    type Aux = Scalar;

    fn value_of(&self, item: &Element) -> Scalar {
        item.value().clone()
    }

    fn aux_of(&self, item: &Element) -> Aux<Scalar> {
        item.aux().cloned().into()
    }
}

macro_rules! impl_bare {
    ($($t:ty),*) => {$(
        impl Extractor<$t> for Defaults {
            type Value = $t;
            type Aux = ();

            fn value_of(&self, item: &$t) -> $t {
                item.clone()
            }

            fn aux_of(&self, _item: &$t) -> Aux<()> {
                Aux::Absent
            }
        }
    )*};
}

impl_bare!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    char,
    bool,
    String,
    Scalar,
    Ratio<i32>,
    Ratio<i64>
);

impl<'a> Extractor<&'a str> for Defaults {
    type Value = &'a str;
    type Aux = ();

    fn value_of(&self, item: &&'a str) -> &'a str {
        item
    }

    fn aux_of(&self, _item: &&'a str) -> Aux<()> {
        Aux::Absent
    }
}

/// Extractor assembled from two closures.
///
/// ```
/// use motif_core::extract::{Aux, Extractor, FnExtractor};
///
/// struct Note { pitch: i32, beats: f64 }
///
/// let by_pitch = FnExtractor::new(|n: &Note| n.pitch, |n: &Note| Aux::Present(n.beats));
/// let note = Note { pitch: 60, beats: 0.5 };
/// assert_eq!(by_pitch.value_of(&note), 60);
/// assert_eq!(by_pitch.aux_of(&note), Aux::Present(0.5));
/// ```
pub struct FnExtractor<F, G, V, A> {
    value_of: F,
    aux_of: G,
    _marker: PhantomData<fn() -> (V, A)>,
}

impl<F, G, V, A> FnExtractor<F, G, V, A> {
    pub fn new<I: ?Sized>(value_of: F, aux_of: G) -> Self
    where
        F: Fn(&I) -> V,
        G: Fn(&I) -> Aux<A>,
    {
        Self {
            value_of,
            aux_of,
            _marker: PhantomData,
        }
    }
}

impl<I: ?Sized, F, V> FnExtractor<F, fn(&I) -> Aux<()>, V, ()> {
    /// Extractor whose items never carry an auxiliary attribute
    pub fn value_only(value_of: F) -> Self
    where
        F: Fn(&I) -> V,
    {
        Self {
            value_of,
            aux_of: no_aux::<I>,
            _marker: PhantomData,
        }
    }
}

fn no_aux<I: ?Sized>(_item: &I) -> Aux<()> {
    Aux::Absent
}

impl<I: ?Sized, F, G, V, A> Extractor<I> for FnExtractor<F, G, V, A>
where
    F: Fn(&I) -> V,
    G: Fn(&I) -> Aux<A>,
{
    type Value = V;
    type Aux = A;

    fn value_of(&self, item: &I) -> V {
        (self.value_of)(item)
    }

    fn aux_of(&self, item: &I) -> Aux<A> {
        (self.aux_of)(item)
    }
}

impl<F, G, V, A> Clone for FnExtractor<F, G, V, A>
where
    F: Clone,
    G: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value_of: self.value_of.clone(),
            aux_of: self.aux_of.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, G, V, A> fmt::Debug for FnExtractor<F, G, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnExtractor").finish_non_exhaustive()
    }
}
