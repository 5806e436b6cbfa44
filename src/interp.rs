//! Linear and nonlinear interpolation.

use num_traits::Float;

use crate::vec::{Scalar, Vector};

/// Trait for linear interpolation between two values.
pub trait Lerp<Sc: Float = f32>: Sized {
    /// Linearly interpolates between `self` and `other`.
    ///
    /// if `t` = 0, returns `self`; if `t` = 1, returns `other`.
    /// For 0 < `t` < 1, returns the weighted average
    /// ```text
    /// (1 - t) * self + t * other
    /// ```
    ///
    /// This method does not panic if `t` < 0 or `t` > 1; it returns the
    /// appropriate extrapolated value. If `t` is NaN the result is
    /// unspecified.
    ///
    /// # Examples
    /// ```
    /// use vecn::Lerp;
    ///
    /// assert_eq!(f32::lerp(&1.0, &5.0, 0.25), 2.0);
    /// ```
    fn lerp(&self, other: &Self, t: Sc) -> Self;

    /// Returns the (unweighted) average of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use vecn::{Lerp, vec2, Vec2};
    ///
    /// let a: Vec2 = vec2(-1.0, 2.0);
    /// let b = vec2(3.0, -2.0);
    /// assert_eq!(a.midpoint(&b), vec2(1.0, 0.0));
    /// ```
    fn midpoint(&self, other: &Self) -> Self {
        let half = (Sc::one() + Sc::one()).recip();
        self.lerp(other, half)
    }

    /// Interpolates between `self` and `other` with `t` first shaped by
    /// [`smoothstep`], easing in and out of the endpoints.
    fn smooth_lerp(&self, other: &Self, t: Sc) -> Self {
        self.lerp(other, smoothstep(t))
    }
}

impl<Sc: Float> Lerp<Sc> for Sc {
    fn lerp(&self, other: &Self, t: Sc) -> Self {
        *self + (*other - *self) * t
    }
}

impl<Sc: Scalar + Float, const N: usize> Lerp<Sc> for Vector<Sc, N> {
    /// Linearly interpolates component-wise between `self` and `other`.
    fn lerp(&self, other: &Self, t: Sc) -> Self {
        *self + (*other - *self) * t
    }
}

/// Linearly interpolates between two values.
///
/// For examples and more information, see [`Lerp::lerp`].
#[inline]
pub fn lerp<Sc: Float, T: Lerp<Sc>>(t: Sc, from: T, to: T) -> T {
    from.lerp(&to, t)
}

/// Returns the relative position of `t` between `min` and `max`.
///
/// That is, returns 0 when `t` = `min`, 1 when `t` = `max`, and linearly
/// interpolates in between.
///
/// The result is unspecified if any of the parameters is non-finite, or if
/// `min` = `max`.
///
/// # Examples
/// ```
/// use vecn::inv_lerp;
///
/// // Two is one fourth of the way from one to five
/// assert_eq!(inv_lerp(2.0, 1.0, 5.0), 0.25);
///
/// // Zero is halfway between -2 and 2
/// assert_eq!(inv_lerp(0.0, -2.0, 2.0), 0.5);
/// ```
#[inline]
pub fn inv_lerp<Sc: Float>(t: Sc, min: Sc, max: Sc) -> Sc {
    (t - min) / (max - min)
}

/// Helper for defining step functions.
///
/// Returns `min` if `t` ≤ 0, `max` if `t` ≥ 1, and `f(t)` if 0 < `t` < 1.
#[inline]
pub fn step<Sc: Float, T: Clone, F>(t: Sc, min: &T, max: &T, f: F) -> T
where
    F: FnOnce(Sc) -> T,
{
    if t <= Sc::zero() {
        min.clone()
    } else if t >= Sc::one() {
        max.clone()
    } else {
        f(t)
    }
}

/// Interpolates smoothly from 0 to 1 as `t` goes from 0 to 1.
///
/// Returns 0 for all `t` ≤ 0 and 1 for all `t` ≥ 1. Has a continuous
/// first derivative.
pub fn smoothstep<Sc: Float>(t: Sc) -> Sc {
    let two = Sc::one() + Sc::one();
    let three = two + Sc::one();
    step(t, &Sc::zero(), &Sc::one(), |t| t * t * (three - two * t))
}

/// Even smoother version of [`smoothstep`].
///
/// Has continuous first and second derivatives.
pub fn smootherstep<Sc: Float>(t: Sc) -> Sc {
    let one = Sc::one();
    let three = one + one + one;
    let six = three + three;
    let ten = six + three + one;
    let fifteen = six + six + three;
    step(t, &Sc::zero(), &Sc::one(), |t| {
        t * t * t * (ten + t * (six * t - fifteen))
    })
}

/// Evaluates the cubic Hermite curve through `p0` and `p1` with tangents
/// `m0` and `m1` at position `t`.
///
/// The endpoints are interpolated exactly: `t` = 0 yields `p0` and `t` = 1
/// yields `p1`. Values of `t` outside [0, 1] extrapolate the cubic.
pub fn hermite<Sc: Scalar + Float, const N: usize>(
    p0: Vector<Sc, N>,
    m0: Vector<Sc, N>,
    p1: Vector<Sc, N>,
    m1: Vector<Sc, N>,
    t: Sc,
) -> Vector<Sc, N> {
    let one = Sc::one();
    let two = one + one;
    let three = two + one;
    let (t2, t3) = (t * t, t * t * t);

    p0 * (two * t3 - three * t2 + one)
        + m0 * (t3 - two * t2 + t)
        + p1 * (three * t2 - two * t3)
        + m1 * (t3 - t2)
}

/// Evaluates the Catmull-Rom spline defined by four control points at
/// position `t`.
///
/// The curve passes through the two middle points: `t` = 0 yields `p1` and
/// `t` = 1 yields `p2`; `p0` and `p3` only shape the tangents.
pub fn catmull_rom<Sc: Scalar + Float, const N: usize>(
    p0: Vector<Sc, N>,
    p1: Vector<Sc, N>,
    p2: Vector<Sc, N>,
    p3: Vector<Sc, N>,
    t: Sc,
) -> Vector<Sc, N> {
    let one = Sc::one();
    let two = one + one;
    let three = two + one;
    let four = two + two;
    let five = four + one;
    let half = two.recip();
    let (t2, t3) = (t * t, t * t * t);

    (p1 * two
        + (p2 - p0) * t
        + (p0 * two - p1 * five + p2 * four - p3) * t2
        + (p3 - p0 + (p1 - p2) * three) * t3)
        * half
}

/// Returns the point with barycentric coordinates (`u`, `v`) in the
/// triangle `a`, `b`, `c`:
///
/// ```text
/// a + u · (b − a) + v · (c − a)
/// ```
///
/// `u` = 0, `v` = 0 yields `a`; `u` = 1 yields `b`; `v` = 1 yields `c`.
/// Coordinates outside the triangle (`u` + `v` > 1, or either negative)
/// are not an error; they address the containing plane.
pub fn barycentric<Sc: Scalar + Float, const N: usize>(
    a: Vector<Sc, N>,
    b: Vector<Sc, N>,
    c: Vector<Sc, N>,
    u: Sc,
    v: Sc,
) -> Vector<Sc, N> {
    a + (b - a) * u + (c - a) * v
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::vec::{vec2, vec3};

    use super::*;

    #[test]
    fn lerp_endpoints() {
        let (a, b) = (vec2(-2.0, 1.0), vec2(3.0, -1.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_approx_eq!(a.lerp(&b, 0.8), vec2(2.0, -0.6));
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(2.0.lerp(&5.0, 2.0), 8.0);
        assert_eq!(lerp(-1.0, vec2(0.0, 0.0), vec2(1.0, 2.0)), vec2(-1.0, -2.0));
    }

    #[test]
    fn midpoint_is_halfway() {
        assert_eq!(2.0.midpoint(&5.0), 3.5);
        assert_eq!(vec2(0.0, 2.0).midpoint(&vec2(2.0, 0.0)), vec2(1.0, 1.0));
    }

    #[test]
    fn inv_lerp_inverts_lerp() {
        assert_eq!(inv_lerp(2.0, 1.0, 5.0), 0.25);
        assert_eq!(inv_lerp(0.0, -2.0, 2.0), 0.5);
    }

    #[test]
    fn smoothstep_values() {
        assert_eq!(0.0, smoothstep(-10.0));
        assert_eq!(0.0, smoothstep(0.0));

        assert_eq!(0.15625, smoothstep(0.25));
        assert_eq!(0.50000, smoothstep(0.5));
        assert_eq!(0.84375, smoothstep(0.75));

        assert_eq!(1.0, smoothstep(1.0));
        assert_eq!(1.0, smoothstep(10.0));
    }

    #[test]
    fn smootherstep_values() {
        assert_eq!(0.0, smootherstep(-10.0));
        assert_eq!(0.0, smootherstep(0.0));

        assert_eq!(0.103515625, smootherstep(0.25));
        assert_eq!(0.5, smootherstep(0.5));
        assert_eq!(0.896484375, smootherstep(0.75));

        assert_eq!(1.0, smootherstep(1.0));
        assert_eq!(1.0, smootherstep(10.0));
    }

    #[test]
    fn smooth_lerp_eases_at_endpoints() {
        let (a, b) = (vec2(0.0, 0.0), vec2(2.0, 4.0));
        assert_eq!(a.smooth_lerp(&b, -1.0), a);
        assert_eq!(a.smooth_lerp(&b, 0.0), a);
        assert_eq!(a.smooth_lerp(&b, 0.5), vec2(1.0, 2.0));
        assert_eq!(a.smooth_lerp(&b, 1.0), b);
        assert_eq!(a.smooth_lerp(&b, 2.0), b);
    }

    #[test]
    fn hermite_interpolates_endpoints() {
        let (p0, p1) = (vec2(0.0, 0.0), vec2(1.0, 2.0));
        let (m0, m1) = (vec2(1.0, 0.0), vec2(0.0, 1.0));
        assert_eq!(hermite(p0, m0, p1, m1, 0.0), p0);
        assert_eq!(hermite(p0, m0, p1, m1, 1.0), p1);
    }

    #[test]
    fn hermite_with_zero_tangents_is_smoothstep() {
        let (p0, p1) = (vec2(0.0, 0.0), vec2(1.0, 1.0));
        let zero = vec2(0.0, 0.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let h = hermite(p0, zero, p1, zero, t);
            assert_approx_eq!(h.x(), smoothstep(t));
            assert_approx_eq!(h.y(), smoothstep(t));
        }
    }

    #[test]
    fn catmull_rom_passes_through_middle_points() {
        let ps = [
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 2.0, -1.0),
            vec3(2.0, 0.0, 1.0),
            vec3(3.0, 1.0, 0.0),
        ];
        let [p0, p1, p2, p3] = ps;
        assert_eq!(catmull_rom(p0, p1, p2, p3, 0.0), p1);
        assert_eq!(catmull_rom(p0, p1, p2, p3, 1.0), p2);
    }

    #[test]
    fn catmull_rom_on_collinear_points_is_linear() {
        let [p0, p1, p2, p3] =
            [0.0, 1.0, 2.0, 3.0].map(|x| vec2(x, 2.0 * x));
        for i in 0..=4 {
            let t = i as f32 / 4.0;
            let p = catmull_rom(p0, p1, p2, p3, t);
            assert_approx_eq!(p.x(), 1.0 + t);
            assert_approx_eq!(p.y(), 2.0 * (1.0 + t));
        }
    }

    #[test]
    fn barycentric_corners_and_centroid() {
        let (a, b, c) = (vec2(0.0, 0.0), vec2(3.0, 0.0), vec2(0.0, 3.0));
        assert_eq!(barycentric(a, b, c, 0.0, 0.0), a);
        assert_eq!(barycentric(a, b, c, 1.0, 0.0), b);
        assert_eq!(barycentric(a, b, c, 0.0, 1.0), c);

        let third = 1.0 / 3.0;
        let centroid = barycentric(a, b, c, third, third);
        assert_approx_eq!(centroid.x(), 1.0);
        assert_approx_eq!(centroid.y(), 1.0);
    }
}
