use super::ResizeOptions;
use crate::{
    core::{
        math::{Vector2, AABB},
        traits::Real,
    },
    error::{Axis, Error, Result},
    path::{Path, PathSeg, PathSink, PathSource},
    slices::{SliceSet, Slices},
};

/// Resizes a source path to arbitrary larger sizes, deforming only the regions covered by its
/// [Slices], like nine-patch scaling applied to path geometry instead of pixels.
///
/// Construction measures the tight bounds of the path and copies its segments once, resizing
/// then only reads that state. Every resize call is independent, so one resizer may be shared
/// between threads.
///
/// # Examples
///
/// ```
/// # use v9::path;
/// # use v9::path::*;
/// # use v9::slices::*;
/// # use v9::PathResizer;
/// # use v9::core::math::vec2;
/// let path = path![move_to(0.0, 0.0), line_to(24.0, 24.0)];
/// let resizer = PathResizer::new(&path, Slices::from_rect(9.0, 7.0, 15.0, 13.0).unwrap());
/// let resized = resizer.resize(30.0, 36.0).unwrap();
/// assert_eq!(resized[1], PathSeg::LineTo(vec2(30.0, 36.0)));
/// // shrinking is not supported
/// assert!(resizer.resize(20.0, 24.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PathResizer<T = f64>
where
    T: Real,
{
    bounds: AABB<T>,
    segments: Vec<PathSeg<T>>,
    slices: Slices<T>,
    stretchable_width: T,
    stretchable_height: T,
}

impl<T> PathResizer<T>
where
    T: Real,
{
    /// Create a resizer for `path` stretched according to `slices`.
    ///
    /// A path without any drawn geometry is given zero size bounds at the origin.
    pub fn new<P>(path: &P, slices: Slices<T>) -> Self
    where
        P: PathSource<Num = T> + ?Sized,
    {
        let bounds = path.tight_bounds().unwrap_or_else(AABB::zero);

        let mut segments = Vec::with_capacity(path.segment_count());
        segments.extend(path.iter_segments());

        let stretchable_width = slices.vertical().total_stretchable();
        let stretchable_height = slices.horizontal().total_stretchable();

        log::debug!(
            "path resizer created: {} segment(s), bounds ({:?}, {:?})-({:?}, {:?}), stretchable {:?} x {:?}",
            segments.len(),
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y,
            stretchable_width,
            stretchable_height
        );

        PathResizer {
            bounds,
            segments,
            slices,
            stretchable_width,
            stretchable_height,
        }
    }

    /// Tight bounds of the source path.
    #[inline]
    pub fn bounds(&self) -> &AABB<T> {
        &self.bounds
    }

    /// Width of the source path bounds, the minimum resize width.
    #[inline]
    pub fn width(&self) -> T {
        self.bounds.width()
    }

    /// Height of the source path bounds, the minimum resize height.
    #[inline]
    pub fn height(&self) -> T {
        self.bounds.height()
    }

    #[inline]
    pub fn slices(&self) -> &Slices<T> {
        &self.slices
    }

    /// Segments of the source path.
    #[inline]
    pub fn segments(&self) -> &[PathSeg<T>] {
        &self.segments
    }

    /// Total size of the vertical slices, the part of the width that stretches.
    #[inline]
    pub fn stretchable_width(&self) -> T {
        self.stretchable_width
    }

    /// Total size of the horizontal slices, the part of the height that stretches.
    #[inline]
    pub fn stretchable_height(&self) -> T {
        self.stretchable_height
    }

    /// Resize the path to `width` x `height`.
    ///
    /// Fails with [Error::UndersizedTarget] if either dimension is smaller than the source path
    /// bounds, or [Error::NoStretchableRegion] if a dimension must grow but all slices of the
    /// matching axis have zero size.
    #[inline]
    pub fn resize(&self, width: T, height: T) -> Result<Path<T>> {
        self.resize_opt(width, height, &ResizeOptions::new())
    }

    /// Same as [PathResizer::resize] with `options` given.
    pub fn resize_opt(&self, width: T, height: T, options: &ResizeOptions<T>) -> Result<Path<T>> {
        let mut result = Path::with_capacity(self.segments.len());
        self.resize_into_opt(width, height, &mut result, options)?;
        Ok(result)
    }

    /// Same as [PathResizer::resize] but writes the resized commands into `dst`.
    ///
    /// `dst` is reset before being written, and left untouched if the arguments are invalid.
    #[inline]
    pub fn resize_into<S>(&self, width: T, height: T, dst: &mut S) -> Result<()>
    where
        S: PathSink<Num = T> + ?Sized,
    {
        self.resize_into_opt(width, height, dst, &ResizeOptions::new())
    }

    /// Same as [PathResizer::resize_into] with `options` given.
    pub fn resize_into_opt<S>(
        &self,
        width: T,
        height: T,
        dst: &mut S,
        options: &ResizeOptions<T>,
    ) -> Result<()>
    where
        S: PathSink<Num = T> + ?Sized,
    {
        let (stretch_x, stretch_y) = self.stretch_factors_opt(width, height, options)?;

        log::trace!(
            "resizing to {:?} x {:?}, stretch factors ({:?}, {:?})",
            width,
            height,
            stretch_x,
            stretch_y
        );

        dst.reset();
        for seg in &self.segments {
            dst.add_seg(&self.stretch_seg(seg, stretch_x, stretch_y));
        }

        Ok(())
    }

    /// Returns the `(x, y)` stretch factors, the growth per unit of slice size, needed to resize
    /// the path to `width` x `height`.
    ///
    /// Fails for the same reasons as [PathResizer::resize].
    #[inline]
    pub fn stretch_factors(&self, width: T, height: T) -> Result<(T, T)> {
        self.stretch_factors_opt(width, height, &ResizeOptions::new())
    }

    /// Same as [PathResizer::stretch_factors] with `options` given.
    pub fn stretch_factors_opt(
        &self,
        width: T,
        height: T,
        options: &ResizeOptions<T>,
    ) -> Result<(T, T)> {
        let stretch_x = axis_stretch_factor(
            self.slices.vertical(),
            self.width(),
            width,
            options.size_eps,
        )?;
        let stretch_y = axis_stretch_factor(
            self.slices.horizontal(),
            self.height(),
            height,
            options.size_eps,
        )?;
        Ok((stretch_x, stretch_y))
    }

    /// Moves `point` as the resize with the stretch factors given would.
    #[inline]
    pub fn stretch_point(&self, point: Vector2<T>, stretch_x: T, stretch_y: T) -> Vector2<T> {
        Vector2::new(
            self.slices.vertical().offset(point.x, stretch_x),
            self.slices.horizontal().offset(point.y, stretch_y),
        )
    }

    /// Moves `seg` as the resize with the stretch factors given would.
    ///
    /// The displacement is measured at the end point of the segment and applied unchanged to
    /// every control point, so curves are translated rigidly and never kink at slice edges.
    pub fn stretch_seg(&self, seg: &PathSeg<T>, stretch_x: T, stretch_y: T) -> PathSeg<T> {
        match seg.end_point() {
            Some(p) => {
                let dx = self.slices.vertical().displacement(p.x, stretch_x);
                let dy = self.slices.horizontal().displacement(p.y, stretch_y);
                seg.translate(dx, dy)
            }
            None => *seg,
        }
    }
}

fn axis_stretch_factor<T>(set: &SliceSet<T>, original: T, target: T, size_eps: T) -> Result<T>
where
    T: Real,
{
    // negated so a NaN target is rejected
    if !(target >= original - size_eps) {
        return Err(Error::UndersizedTarget {
            axis: set.axis(),
            target: target.as_f64(),
            original: original.as_f64(),
        });
    }

    if set.total_stretchable() == T::zero() {
        if target > original + size_eps {
            return Err(Error::NoStretchableRegion {
                axis: set.axis(),
                target: target.as_f64(),
                original: original.as_f64(),
            });
        }
        return Ok(T::zero());
    }

    Ok(set.stretch_factor(original, num_traits::real::Real::max(target, original)))
}
