//! Images as shared callables over the continuous plane

use crate::algebra::transform::ImageTransform;
use crate::spatial::Coord;
use std::fmt;
use std::sync::Arc;

type Sampler<T> = dyn Fn(Coord) -> T + Send + Sync;

/// A pure mapping from a coordinate to a value of type `T`
///
/// Cloning shares the underlying function; composition never mutates an
/// existing image, it wraps it in a new one. Images are `Send + Sync` so the
/// rasterizer can sample disjoint rows from several threads.
pub struct Image<T> {
    sampler: Arc<Sampler<T>>,
}

impl<T> Clone for Image<T> {
    fn clone(&self) -> Self {
        Self {
            sampler: Arc::clone(&self.sampler),
        }
    }
}

impl<T> fmt::Debug for Image<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image").finish_non_exhaustive()
    }
}

impl<T: 'static> Image<T> {
    /// Wrap a sampling function as an image
    pub fn new<F>(sampler: F) -> Self
    where
        F: Fn(Coord) -> T + Send + Sync + 'static,
    {
        Self {
            sampler: Arc::new(sampler),
        }
    }

    /// An image with the same value everywhere
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move |_| value.clone())
    }

    /// Evaluate the image at a coordinate
    pub fn sample(&self, at: Coord) -> T {
        (self.sampler)(at)
    }

    /// Evaluate the image at `(col, row)`
    pub fn at(&self, col: f64, row: f64) -> T {
        self.sample(Coord::new(col, row))
    }

    /// Pointwise value transform: `result(c) = f(self(c))`
    pub fn map<U, F>(&self, f: F) -> Image<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = self.clone();
        Image::new(move |c| f(source.sample(c)))
    }

    /// Pointwise binary combination: `result(c) = f(self(c), other(c))`
    pub fn combine<U, V, F>(&self, other: &Image<U>, f: F) -> Image<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        Image::new(move |c| f(left.sample(c), right.sample(c)))
    }

    /// Apply an image transform to this image
    pub fn transform<Tr>(&self, transform: &Tr) -> Self
    where
        Tr: ImageTransform<T> + ?Sized,
    {
        transform.apply(self.clone())
    }
}
