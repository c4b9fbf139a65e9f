use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use v9::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Returns the solutions to the quadratic equation.
///
/// Quadratic equation is `-b +/- sqrt(b * b - 4 * a * c) / (2 * a)`.
/// With the `sqrt_discriminant` defined as `sqrt(b * b - 4 * a * c)`.
///
/// The purpose of this function is to minimize error in the process of finding solutions
/// to the quadratic equation.
#[inline]
pub fn quadratic_solutions<T>(a: T, b: T, c: T, sqrt_discriminant: T) -> (T, T)
where
    T: Real,
{
    debug_assert!(
        (b * b - T::four() * a * c)
            .sqrt()
            .fuzzy_eq_eps(sqrt_discriminant, T::from(1e-4).unwrap_or_else(T::fuzzy_epsilon)),
        "discriminant is not valid"
    );
    // Avoids loss in precision due to taking the difference of two floating point values that are
    // very near each other in value.
    // https://math.stackexchange.com/questions/311382/solving-a-quadratic-equation-with-precision-when-using-floating-point-variables
    let denom = T::two() * a;
    let sol1 = if b < T::zero() {
        (-b + sqrt_discriminant) / denom
    } else {
        (-b - sqrt_discriminant) / denom
    };

    let sol2 = (c / a) / sol1;

    (sol1, sol2)
}

/// Returns the point on the quadratic bezier `p0`, `p1`, `p2` at parametric value `t`.
#[inline]
pub fn quad_bezier_point<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    let mt = T::one() - t;
    let a = mt * mt;
    let b = T::two() * mt * t;
    let c = t * t;
    Vector2::new(
        a * p0.x + b * p1.x + c * p2.x,
        a * p0.y + b * p1.y + c * p2.y,
    )
}

/// Returns the point on the cubic bezier `p0`, `p1`, `p2`, `p3` at parametric value `t`.
#[inline]
pub fn cubic_bezier_point<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    p2: Vector2<T>,
    p3: Vector2<T>,
    t: T,
) -> Vector2<T>
where
    T: Real,
{
    let mt = T::one() - t;
    let a = mt * mt * mt;
    let b = T::three() * mt * mt * t;
    let c = T::three() * mt * t * t;
    let d = t * t * t;
    Vector2::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

#[inline]
fn interior_param<T>(t: T) -> Option<T>
where
    T: Real,
{
    // NaN fails both comparisons
    if t > T::zero() && t < T::one() {
        Some(t)
    } else {
        None
    }
}

/// Returns the parametric value in `(0, 1)` where the 1D quadratic bezier `v0`, `v1`, `v2` has
/// a local extremum, if any.
///
/// # Examples
///
/// ```
/// # use v9::core::math::*;
/// // symmetric hump peaks half way
/// assert_eq!(quad_bezier_extremum(0.0, 2.0, 0.0), Some(0.5));
/// // monotonic curve has no interior extremum
/// assert_eq!(quad_bezier_extremum(0.0, 1.0, 2.0), None);
/// ```
#[inline]
pub fn quad_bezier_extremum<T>(v0: T, v1: T, v2: T) -> Option<T>
where
    T: Real,
{
    // derivative 2 * ((v1 - v0) + t * (v0 - 2 * v1 + v2)) = 0
    let denom = v0 - T::two() * v1 + v2;
    if denom.fuzzy_eq_zero() {
        return None;
    }

    interior_param((v0 - v1) / denom)
}

/// Returns the (up to two) parametric values in `(0, 1)` where the 1D cubic bezier `v0`, `v1`,
/// `v2`, `v3` has a local extremum.
///
/// # Examples
///
/// ```
/// # use v9::core::math::*;
/// // s-curve overshoots on both sides
/// let [t1, t2] = cubic_bezier_extrema(0.0, 3.0, -2.0, 1.0);
/// assert!(t1.is_some() && t2.is_some());
/// // straight ramp has none
/// assert_eq!(cubic_bezier_extrema(0.0, 1.0, 2.0, 3.0), [None, None]);
/// ```
pub fn cubic_bezier_extrema<T>(v0: T, v1: T, v2: T, v3: T) -> [Option<T>; 2]
where
    T: Real,
{
    // derivative / 3 = a * t^2 + b * t + c
    let d0 = v1 - v0;
    let d1 = v2 - v1;
    let d2 = v3 - v2;
    let a = d0 - T::two() * d1 + d2;
    let b = T::two() * (d1 - d0);
    let c = d0;

    if a.fuzzy_eq_zero() {
        // degenerates to a line
        if b.fuzzy_eq_zero() {
            return [None, None];
        }
        return [interior_param(-c / b), None];
    }

    let discriminant = b * b - T::four() * a * c;
    if discriminant < T::zero() {
        return [None, None];
    }

    let sqrt_discriminant = discriminant.sqrt();
    if b.fuzzy_eq_zero() && c.fuzzy_eq_zero() {
        // double root at t = 0
        return [None, None];
    }

    let (sol1, sol2) = quadratic_solutions(a, b, c, sqrt_discriminant);
    [interior_param(sol1), interior_param(sol2)]
}
