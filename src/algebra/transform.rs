//! Image transforms and their composition
//!
//! A transform maps an `Image<T>` to a new `Image<T>`. Geometric transforms are
//! built from a single primitive, [`coord_transform`], which pulls each
//! destination coordinate back to the source coordinate sampled there.
//!
//! Composition follows one convention throughout the crate:
//! `a.and_then(b).apply(image) == b.apply(a.apply(image))`. For two pullbacks
//! `pa` and `pb` the composed image samples the source at `pa(pb(c))`.

use crate::algebra::image::Image;
use crate::spatial::Coord;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A function from `Image<T>` to `Image<T>`
pub trait ImageTransform<T>: Send + Sync {
    /// Produce the transformed image
    fn apply(&self, image: Image<T>) -> Image<T>;

    /// Compose with `next`, which is applied to the result of `self`
    fn and_then<B>(self, next: B) -> AndThen<Self, B>
    where
        Self: Sized,
        B: ImageTransform<T>,
    {
        AndThen {
            first: self,
            second: next,
        }
    }

    /// Erase the concrete transform type
    fn boxed(self) -> BoxedTransform<T>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased transform, for heterogeneous chains
pub type BoxedTransform<T> = Box<dyn ImageTransform<T>>;

impl<T> ImageTransform<T> for BoxedTransform<T> {
    fn apply(&self, image: Image<T>) -> Image<T> {
        (**self).apply(image)
    }
}

/// Sequential composition of two transforms
#[derive(Clone, Debug)]
pub struct AndThen<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> ImageTransform<T> for AndThen<A, B>
where
    A: ImageTransform<T>,
    B: ImageTransform<T>,
{
    fn apply(&self, image: Image<T>) -> Image<T> {
        self.second.apply(self.first.apply(image))
    }
}

type Pullback = dyn Fn(Coord) -> Coord + Send + Sync;

/// Transform that resamples an image through a coordinate pullback
pub struct CoordTransform<T> {
    pullback: Arc<Pullback>,
    _value: PhantomData<fn() -> T>,
}

impl<T> CoordTransform<T> {
    /// The destination-to-source coordinate mapping
    pub fn pullback(&self, destination: Coord) -> Coord {
        (self.pullback)(destination)
    }
}

impl<T> Clone for CoordTransform<T> {
    fn clone(&self) -> Self {
        Self {
            pullback: Arc::clone(&self.pullback),
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for CoordTransform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordTransform").finish_non_exhaustive()
    }
}

impl<T: 'static> ImageTransform<T> for CoordTransform<T> {
    fn apply(&self, image: Image<T>) -> Image<T> {
        let pullback = Arc::clone(&self.pullback);
        Image::new(move |c| image.sample(pullback(c)))
    }
}

/// Build the transform `new(c) = old(pullback(c))`
///
/// To move an image in some direction, `pullback` must map each destination
/// coordinate back to the source coordinate that belongs there.
pub fn coord_transform<T, F>(pullback: F) -> CoordTransform<T>
where
    F: Fn(Coord) -> Coord + Send + Sync + 'static,
{
    CoordTransform {
        pullback: Arc::new(pullback),
        _value: PhantomData,
    }
}

type Rewrite<T> = dyn Fn(Coord, T) -> T + Send + Sync;

/// Transform that rewrites each value with knowledge of where it was sampled
pub struct ValueTransform<T> {
    rewrite: Arc<Rewrite<T>>,
}

impl<T> Clone for ValueTransform<T> {
    fn clone(&self) -> Self {
        Self {
            rewrite: Arc::clone(&self.rewrite),
        }
    }
}

impl<T> fmt::Debug for ValueTransform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueTransform").finish_non_exhaustive()
    }
}

impl<T: 'static> ImageTransform<T> for ValueTransform<T> {
    fn apply(&self, image: Image<T>) -> Image<T> {
        let rewrite = Arc::clone(&self.rewrite);
        Image::new(move |c| rewrite(c, image.sample(c)))
    }
}

/// Build the transform `new(c) = rewrite(c, old(c))`
pub fn value_transform<T, F>(rewrite: F) -> ValueTransform<T>
where
    F: Fn(Coord, T) -> T + Send + Sync + 'static,
{
    ValueTransform {
        rewrite: Arc::new(rewrite),
    }
}

/// The transform that returns its input unchanged
pub struct Identity<T> {
    _value: PhantomData<fn() -> T>,
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        identity()
    }
}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<T> ImageTransform<T> for Identity<T> {
    fn apply(&self, image: Image<T>) -> Image<T> {
        image
    }
}

/// The identity transform
pub const fn identity<T>() -> Identity<T> {
    Identity {
        _value: PhantomData,
    }
}
