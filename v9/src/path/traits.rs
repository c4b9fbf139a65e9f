//! Traits connecting the resizer to path representations.
use super::{seg_bounding_box, PathSeg};
use crate::{
    core::{
        math::{Vector2, AABB},
        traits::Real,
    },
    resizer::PathResizer,
    slices::Slices,
};

/// Read access to a path as an ordered stream of [PathSeg] drawing commands.
///
/// Implementors only provide the segment stream, bounds queries and the resizer entry point are
/// built on top of it. Conics are not part of [PathSeg], a source wrapping a representation that
/// has them must convert them to quadratics while iterating.
pub trait PathSource {
    /// Numeric type used by the path.
    type Num: Real;

    /// Total number of segments yielded by [PathSource::iter_segments].
    fn segment_count(&self) -> usize;

    /// Iterate the drawing commands in order.
    fn iter_segments(&self) -> impl Iterator<Item = PathSeg<Self::Num>> + '_;

    /// Returns `true` if the path has no segments.
    #[inline]
    fn is_empty(&self) -> bool {
        self.segment_count() == 0
    }

    /// Bounding box of the drawn geometry, taking curve extrema into account rather than control
    /// points. Move points are included.
    ///
    /// Returns `None` if the path has no segments or only [PathSeg::Close] segments.
    ///
    /// # Examples
    ///
    /// ```
    /// # use v9::path;
    /// # use v9::path::*;
    /// let hump = path![move_to(0.0, 0.0), quad_to(1.0, 2.0, 2.0, 0.0)];
    /// let tight = hump.tight_bounds().unwrap();
    /// let loose = hump.control_bounds().unwrap();
    /// assert!((tight.max_y - 1.0f64).abs() < 1e-12);
    /// assert_eq!(loose.max_y, 2.0);
    /// ```
    fn tight_bounds(&self) -> Option<AABB<Self::Num>> {
        let mut result: Option<AABB<Self::Num>> = None;
        let mut current = Vector2::zero();
        let mut subpath_start = Vector2::zero();

        for seg in self.iter_segments() {
            if let Some(seg_box) = seg_bounding_box(current, &seg) {
                result = Some(match result {
                    Some(r) => r.union(&seg_box),
                    None => seg_box,
                });
            }

            match seg {
                PathSeg::MoveTo(p) => {
                    current = p;
                    subpath_start = p;
                }
                PathSeg::Close => current = subpath_start,
                _ => {
                    if let Some(p) = seg.end_point() {
                        current = p;
                    }
                }
            }
        }

        result
    }

    /// Bounding box of every point of the path, control points included.
    ///
    /// Returns `None` if the path has no points.
    fn control_bounds(&self) -> Option<AABB<Self::Num>> {
        let mut result: Option<AABB<Self::Num>> = None;
        for seg in self.iter_segments() {
            seg.visit_points(|p| {
                result = Some(match result.take() {
                    Some(mut r) => {
                        r.include_point(p);
                        r
                    }
                    None => AABB::from_point(p),
                });
            });
        }

        result
    }

    /// Create a [PathResizer] for this path stretched according to `slices`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use v9::path;
    /// # use v9::path::*;
    /// # use v9::slices::*;
    /// let square = path![
    ///     move_to(0.0, 0.0),
    ///     line_to(4.0, 0.0),
    ///     line_to(4.0, 4.0),
    ///     line_to(0.0, 4.0),
    ///     close(),
    /// ];
    /// let resizer = square.resizer(Slices::from_rect(1, 1, 3, 3).unwrap());
    /// let wide = resizer.resize(10.0, 4.0).unwrap();
    /// assert_eq!(wide[2], PathSeg::LineTo(v9::core::math::vec2(10.0, 4.0)));
    /// ```
    #[inline]
    fn resizer(&self, slices: Slices<Self::Num>) -> PathResizer<Self::Num>
    where
        Self: Sized,
    {
        PathResizer::new(self, slices)
    }
}

/// Write access to a path under construction.
///
/// [PathResizer::resize_into] emits its output through this trait so the resized commands can be
/// fed directly into any path builder (a renderer's path type, an SVG writer, etc.).
pub trait PathSink {
    /// Numeric type accepted by the sink.
    type Num: Real;

    fn move_to(&mut self, x: Self::Num, y: Self::Num);

    fn line_to(&mut self, x: Self::Num, y: Self::Num);

    fn quad_to(&mut self, cx: Self::Num, cy: Self::Num, x: Self::Num, y: Self::Num);

    #[allow(clippy::too_many_arguments)]
    fn cubic_to(
        &mut self,
        c1x: Self::Num,
        c1y: Self::Num,
        c2x: Self::Num,
        c2y: Self::Num,
        x: Self::Num,
        y: Self::Num,
    );

    fn close(&mut self);

    /// Discard all previously added commands so the sink can be reused.
    fn reset(&mut self);

    /// Forward `seg` to the matching command method.
    #[inline]
    fn add_seg(&mut self, seg: &PathSeg<Self::Num>) {
        match *seg {
            PathSeg::MoveTo(p) => self.move_to(p.x, p.y),
            PathSeg::LineTo(p) => self.line_to(p.x, p.y),
            PathSeg::QuadTo(c, p) => self.quad_to(c.x, c.y, p.x, p.y),
            PathSeg::CubicTo(c1, c2, p) => self.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
            PathSeg::Close => self.close(),
        }
    }
}

impl<T> PathSource for [PathSeg<T>]
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn segment_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn iter_segments(&self) -> impl Iterator<Item = PathSeg<T>> + '_ {
        self.iter().copied()
    }
}
