//! Free-standing image combinators
//!
//! Thin wrappers over the `Image` methods plus the multi-image combinators
//! (left fold, per-point selection and blending).

use crate::algebra::color::Color;
use crate::algebra::image::Image;
use crate::io::error::{AlgebraError, Result};
use std::sync::Arc;

/// An image that ignores its coordinate and always returns `value`
pub fn constant_image<T>(value: T) -> Image<T>
where
    T: Clone + Send + Sync + 'static,
{
    Image::constant(value)
}

/// Pointwise value transform: `map_image(f, image)(c) = f(image(c))`
pub fn map_image<T, U, F>(f: F, image: &Image<T>) -> Image<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    image.map(f)
}

/// Pointwise binary combination of two images
pub fn combine_image<A, B, C, F>(image_a: &Image<A>, image_b: &Image<B>, combine: F) -> Image<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Send + Sync + 'static,
{
    image_a.combine(image_b, combine)
}

/// Left fold of [`combine_image`] across a sequence of images
///
/// # Errors
///
/// Returns [`AlgebraError::EmptySequence`] when `images` yields nothing, since
/// an arbitrary `combine` has no identity value to fall back on.
pub fn combine_many<T, I, F>(images: I, combine: F) -> Result<Image<T>>
where
    T: 'static,
    I: IntoIterator<Item = Image<T>>,
    F: Fn(T, T) -> T + Send + Sync + 'static,
{
    let mut images = images.into_iter();
    let first = images.next().ok_or(AlgebraError::EmptySequence {
        operation: "combine_many",
    })?;

    let combine = Arc::new(combine);
    Ok(images.fold(first, |acc, next| {
        let combine = Arc::clone(&combine);
        acc.combine(&next, move |a, b| combine(a, b))
    }))
}

/// Saturating color sum of several images
///
/// # Errors
///
/// Returns [`AlgebraError::EmptySequence`] when `images` yields nothing
pub fn sum<I>(images: I) -> Result<Image<Color>>
where
    I: IntoIterator<Item = Image<Color>>,
{
    combine_many(images, Color::saturating_add)
}

/// Per-point selection: `if_true` where `mask` holds, `if_false` elsewhere
pub fn cond<T>(mask: &Image<bool>, if_true: &Image<T>, if_false: &Image<T>) -> Image<T>
where
    T: 'static,
{
    let mask = mask.clone();
    let if_true = if_true.clone();
    let if_false = if_false.clone();
    Image::new(move |c| {
        if mask.sample(c) {
            if_true.sample(c)
        } else {
            if_false.sample(c)
        }
    })
}

/// Per-point linear interpolation from `a` to `b`, driven by `weight`
///
/// A weight of zero yields `a`, one yields `b`; weights are clamped to the
/// unit range.
pub fn blend(a: &Image<Color>, b: &Image<Color>, weight: &Image<f64>) -> Image<Color> {
    let pair = a.combine(b, |from, to| (from, to));
    pair.combine(weight, |(from, to), w| from.lerp(to, w))
}
