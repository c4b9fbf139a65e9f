use crate::core::{
    math::{
        cubic_bezier_extrema, cubic_bezier_point, min_max, quad_bezier_extremum,
        quad_bezier_point, Vector2, AABB,
    },
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One drawing command of a path.
///
/// The start point of every drawing segment is implied: it is the end point of the previous
/// segment (or the start of the subpath after a [PathSeg::Close]). Conic sections are not
/// representable, they must be converted to quadratics before reaching this type.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSeg<T = f64> {
    /// Start a new subpath at the point.
    MoveTo(Vector2<T>),
    /// Straight line to the point.
    LineTo(Vector2<T>),
    /// Quadratic bezier with a control point and end point.
    QuadTo(Vector2<T>, Vector2<T>),
    /// Cubic bezier with two control points and end point.
    CubicTo(Vector2<T>, Vector2<T>, Vector2<T>),
    /// Close the current subpath with a line back to its start.
    Close,
}

impl<T> PathSeg<T>
where
    T: Real,
{
    /// End point of the segment, `None` for [PathSeg::Close].
    #[inline]
    pub fn end_point(&self) -> Option<Vector2<T>> {
        match *self {
            PathSeg::MoveTo(p) | PathSeg::LineTo(p) => Some(p),
            PathSeg::QuadTo(_, p) => Some(p),
            PathSeg::CubicTo(_, _, p) => Some(p),
            PathSeg::Close => None,
        }
    }

    /// Number of points carried by the segment (0 to 3).
    #[inline]
    pub fn point_count(&self) -> usize {
        match self {
            PathSeg::MoveTo(_) | PathSeg::LineTo(_) => 1,
            PathSeg::QuadTo(..) => 2,
            PathSeg::CubicTo(..) => 3,
            PathSeg::Close => 0,
        }
    }

    /// Visit every point of the segment in order (control points first, end point last).
    #[inline]
    pub fn visit_points<F>(&self, mut visitor: F)
    where
        F: FnMut(Vector2<T>),
    {
        match *self {
            PathSeg::MoveTo(p) | PathSeg::LineTo(p) => visitor(p),
            PathSeg::QuadTo(c, p) => {
                visitor(c);
                visitor(p);
            }
            PathSeg::CubicTo(c1, c2, p) => {
                visitor(c1);
                visitor(c2);
                visitor(p);
            }
            PathSeg::Close => {}
        }
    }

    /// Returns the segment with every point (control points included) moved by `dx`, `dy`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use v9::path::*;
    /// # use v9::core::math::vec2;
    /// let seg = PathSeg::QuadTo(vec2(1.0, 2.0), vec2(3.0, 4.0));
    /// assert_eq!(seg.translate(1.0, -1.0), PathSeg::QuadTo(vec2(2.0, 1.0), vec2(4.0, 3.0)));
    /// assert_eq!(PathSeg::<f64>::Close.translate(1.0, 1.0), PathSeg::Close);
    /// ```
    #[inline]
    pub fn translate(&self, dx: T, dy: T) -> Self {
        match *self {
            PathSeg::MoveTo(p) => PathSeg::MoveTo(p.translate(dx, dy)),
            PathSeg::LineTo(p) => PathSeg::LineTo(p.translate(dx, dy)),
            PathSeg::QuadTo(c, p) => PathSeg::QuadTo(c.translate(dx, dy), p.translate(dx, dy)),
            PathSeg::CubicTo(c1, c2, p) => PathSeg::CubicTo(
                c1.translate(dx, dy),
                c2.translate(dx, dy),
                p.translate(dx, dy),
            ),
            PathSeg::Close => PathSeg::Close,
        }
    }
}

/// Computes the tight axis aligned bounding box of the geometry drawn by `seg` starting at
/// `start`.
///
/// Curves are measured at their extrema rather than at their control points. Returns `None` for
/// [PathSeg::Close] (its line ends at the subpath start, which is already part of the bounds of
/// the subpath's move). [PathSeg::MoveTo] only covers its own point.
///
/// # Examples
///
/// ```
/// # use v9::path::*;
/// # use v9::core::math::vec2;
/// // arch peaking at y = 0.75 while its control points reach y = 1
/// let seg = PathSeg::CubicTo(vec2(0.0, 1.0), vec2(1.0, 1.0), vec2(1.0, 0.0));
/// let bb = seg_bounding_box(vec2(0.0, 0.0), &seg).unwrap();
/// assert_eq!((bb.min_x, bb.min_y, bb.max_x), (0.0, 0.0, 1.0));
/// assert!((bb.max_y - 0.75f64).abs() < 1e-12);
/// ```
pub fn seg_bounding_box<T>(start: Vector2<T>, seg: &PathSeg<T>) -> Option<AABB<T>>
where
    T: Real,
{
    match *seg {
        PathSeg::MoveTo(p) => Some(AABB::from_point(p)),
        PathSeg::LineTo(p) => {
            let (min_x, max_x) = min_max(start.x, p.x);
            let (min_y, max_y) = min_max(start.y, p.y);
            Some(AABB::new(min_x, min_y, max_x, max_y))
        }
        PathSeg::QuadTo(c, p) => {
            let mut result = AABB::from_point(start);
            result.include_point(p);
            let params = [
                quad_bezier_extremum(start.x, c.x, p.x),
                quad_bezier_extremum(start.y, c.y, p.y),
            ];
            for t in params.into_iter().flatten() {
                result.include_point(quad_bezier_point(start, c, p, t));
            }
            Some(result)
        }
        PathSeg::CubicTo(c1, c2, p) => {
            let mut result = AABB::from_point(start);
            result.include_point(p);
            let [tx1, tx2] = cubic_bezier_extrema(start.x, c1.x, c2.x, p.x);
            let [ty1, ty2] = cubic_bezier_extrema(start.y, c1.y, c2.y, p.y);
            for t in [tx1, tx2, ty1, ty2].into_iter().flatten() {
                result.include_point(cubic_bezier_point(start, c1, c2, p, t));
            }
            Some(result)
        }
        PathSeg::Close => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn end_points_and_counts() {
        let segs = [
            PathSeg::MoveTo(vec2(1.0, 2.0)),
            PathSeg::LineTo(vec2(3.0, 4.0)),
            PathSeg::QuadTo(vec2(0.0, 0.0), vec2(5.0, 6.0)),
            PathSeg::CubicTo(vec2(0.0, 0.0), vec2(0.0, 0.0), vec2(7.0, 8.0)),
            PathSeg::Close,
        ];
        let ends: Vec<_> = segs.iter().map(|s| s.end_point()).collect();
        assert_eq!(
            ends,
            vec![
                Some(vec2(1.0, 2.0)),
                Some(vec2(3.0, 4.0)),
                Some(vec2(5.0, 6.0)),
                Some(vec2(7.0, 8.0)),
                None
            ]
        );
        let counts: Vec<_> = segs.iter().map(|s| s.point_count()).collect();
        assert_eq!(counts, vec![1, 1, 2, 3, 0]);
    }

    #[test]
    fn visit_points_order() {
        let seg = PathSeg::CubicTo(vec2(1.0, 0.0), vec2(2.0, 0.0), vec2(3.0, 0.0));
        let mut xs = Vec::new();
        seg.visit_points(|p| xs.push(p.x));
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn quad_bounds_use_extremum() {
        let seg = PathSeg::QuadTo(vec2(1.0, 2.0), vec2(2.0, 0.0));
        let bb = seg_bounding_box(vec2(0.0, 0.0), &seg).unwrap();
        assert_fuzzy_eq!(bb.min_x, 0.0);
        assert_fuzzy_eq!(bb.max_x, 2.0);
        assert_fuzzy_eq!(bb.min_y, 0.0);
        // control point is at y = 2, curve peaks at y = 1
        assert_fuzzy_eq!(bb.max_y, 1.0);
    }

    #[test]
    fn line_bounds_include_start() {
        let bb = seg_bounding_box(vec2(4.0, -1.0), &PathSeg::LineTo(vec2(1.0, 3.0))).unwrap();
        assert_eq!((bb.min_x, bb.min_y, bb.max_x, bb.max_y), (1.0, -1.0, 4.0, 3.0));
    }

    #[test]
    fn close_has_no_bounds() {
        assert!(seg_bounding_box(vec2(1.0, 1.0), &PathSeg::<f64>::Close).is_none());
    }
}
