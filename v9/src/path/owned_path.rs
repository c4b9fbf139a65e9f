use super::{PathSeg, PathSink, PathSource};
use crate::core::{
    math::{vec2, Vector2},
    traits::Real,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Basic owned path representation: an ordered list of [PathSeg] drawing commands.
///
/// Implements [PathSource] so it can be resized and [PathSink] so it can receive resized output.
/// Builder methods return `&mut Self` so commands can be chained.
///
/// # Examples
///
/// ```
/// # use v9::path::*;
/// # use v9::core::math::vec2;
/// let mut path = Path::new();
/// path.move_to(20.0, 2.0)
///     .line_to(4.0, 2.0)
///     .rel_cubic_to(-1.1, 0.0, -2.0, 0.9, -2.0, 2.0)
///     .close();
/// assert_eq!(path.len(), 4);
/// // relative coordinates start from the end of the line
/// assert_eq!(path[2].end_point(), Some(vec2(2.0, 4.0)));
/// // closing returns to the subpath start
/// assert_eq!(path.current_point(), vec2(20.0, 2.0));
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Path<T = f64> {
    /// Contiguous sequence of drawing commands.
    pub segments: Vec<PathSeg<T>>,
}

impl<T> Default for Path<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Path<T>
where
    T: Real,
{
    /// Create a new empty [Path].
    #[inline]
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Create a new empty [Path] with room for `capacity` segments.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            segments: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.segments.reserve(additional);
    }

    /// Remove all segments, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Append a segment.
    #[inline]
    pub fn push(&mut self, seg: PathSeg<T>) -> &mut Self {
        self.segments.push(seg);
        self
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PathSeg<T>> {
        self.segments.iter()
    }

    /// Point where the next drawing segment starts.
    ///
    /// This is the end of the last segment, or the start of the last subpath if the path was just
    /// closed. An empty path starts at the origin.
    pub fn current_point(&self) -> Vector2<T> {
        let mut closed = false;
        for seg in self.segments.iter().rev() {
            match seg {
                PathSeg::Close => closed = true,
                PathSeg::MoveTo(p) => return *p,
                _ if !closed => {
                    if let Some(p) = seg.end_point() {
                        return p;
                    }
                }
                _ => {}
            }
        }

        Vector2::zero()
    }

    #[inline]
    pub fn move_to(&mut self, x: T, y: T) -> &mut Self {
        self.push(PathSeg::MoveTo(vec2(x, y)))
    }

    #[inline]
    pub fn line_to(&mut self, x: T, y: T) -> &mut Self {
        self.push(PathSeg::LineTo(vec2(x, y)))
    }

    #[inline]
    pub fn quad_to(&mut self, cx: T, cy: T, x: T, y: T) -> &mut Self {
        self.push(PathSeg::QuadTo(vec2(cx, cy), vec2(x, y)))
    }

    #[inline]
    pub fn cubic_to(&mut self, c1x: T, c1y: T, c2x: T, c2y: T, x: T, y: T) -> &mut Self {
        self.push(PathSeg::CubicTo(vec2(c1x, c1y), vec2(c2x, c2y), vec2(x, y)))
    }

    #[inline]
    pub fn close(&mut self) -> &mut Self {
        self.push(PathSeg::Close)
    }

    /// Same as [Path::move_to] with coordinates relative to [Path::current_point].
    #[inline]
    pub fn rel_move_to(&mut self, dx: T, dy: T) -> &mut Self {
        let p = self.current_point();
        self.move_to(p.x + dx, p.y + dy)
    }

    /// Same as [Path::line_to] with coordinates relative to [Path::current_point].
    #[inline]
    pub fn rel_line_to(&mut self, dx: T, dy: T) -> &mut Self {
        let p = self.current_point();
        self.line_to(p.x + dx, p.y + dy)
    }

    /// Same as [Path::quad_to] with all coordinates relative to [Path::current_point].
    #[inline]
    pub fn rel_quad_to(&mut self, dcx: T, dcy: T, dx: T, dy: T) -> &mut Self {
        let p = self.current_point();
        self.quad_to(p.x + dcx, p.y + dcy, p.x + dx, p.y + dy)
    }

    /// Same as [Path::cubic_to] with all coordinates relative to [Path::current_point].
    #[inline]
    pub fn rel_cubic_to(&mut self, dc1x: T, dc1y: T, dc2x: T, dc2y: T, dx: T, dy: T) -> &mut Self {
        let p = self.current_point();
        self.cubic_to(
            p.x + dc1x,
            p.y + dc1y,
            p.x + dc2x,
            p.y + dc2y,
            p.x + dx,
            p.y + dy,
        )
    }

    /// Returns `true` if both paths have the same commands with fuzzy equal points.
    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().zip(other.iter()).all(|(a, b)| match (*a, *b) {
            (PathSeg::MoveTo(p1), PathSeg::MoveTo(p2))
            | (PathSeg::LineTo(p1), PathSeg::LineTo(p2)) => p1.fuzzy_eq_eps(p2, fuzzy_epsilon),
            (PathSeg::QuadTo(c1, p1), PathSeg::QuadTo(c2, p2)) => {
                c1.fuzzy_eq_eps(c2, fuzzy_epsilon) && p1.fuzzy_eq_eps(p2, fuzzy_epsilon)
            }
            (PathSeg::CubicTo(a1, a2, p1), PathSeg::CubicTo(b1, b2, p2)) => {
                a1.fuzzy_eq_eps(b1, fuzzy_epsilon)
                    && a2.fuzzy_eq_eps(b2, fuzzy_epsilon)
                    && p1.fuzzy_eq_eps(p2, fuzzy_epsilon)
            }
            (PathSeg::Close, PathSeg::Close) => true,
            _ => false,
        })
    }

    /// Same as [Path::fuzzy_eq_eps] using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T> Index<usize> for Path<T> {
    type Output = PathSeg<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.segments[index]
    }
}

impl<T> FromIterator<PathSeg<T>> for Path<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = PathSeg<T>>,
    {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<PathSeg<T>> for Path<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = PathSeg<T>>,
    {
        self.segments.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a PathSeg<T>;
    type IntoIter = std::slice::Iter<'a, PathSeg<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl<T> PathSource for Path<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    fn iter_segments(&self) -> impl Iterator<Item = PathSeg<T>> + '_ {
        self.segments.iter().copied()
    }
}

impl<T> PathSink for Path<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn move_to(&mut self, x: T, y: T) {
        self.push(PathSeg::MoveTo(vec2(x, y)));
    }

    #[inline]
    fn line_to(&mut self, x: T, y: T) {
        self.push(PathSeg::LineTo(vec2(x, y)));
    }

    #[inline]
    fn quad_to(&mut self, cx: T, cy: T, x: T, y: T) {
        self.push(PathSeg::QuadTo(vec2(cx, cy), vec2(x, y)));
    }

    #[inline]
    fn cubic_to(&mut self, c1x: T, c1y: T, c2x: T, c2y: T, x: T, y: T) {
        self.push(PathSeg::CubicTo(vec2(c1x, c1y), vec2(c2x, c2y), vec2(x, y)));
    }

    #[inline]
    fn close(&mut self) {
        self.push(PathSeg::Close);
    }

    #[inline]
    fn reset(&mut self) {
        self.clear();
    }
}
