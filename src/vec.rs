//! Fixed-dimension vectors, generic over scalar type and dimension.

use core::array;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use bytemuck::{Pod, Zeroable};
use num_traits::{Num, NumAssign};
#[cfg(feature = "fp")]
use num_traits::Float;

use crate::Error;
use crate::approx::ApproxEq;

/// The scalar types that can be vector components.
///
/// Blanket-implemented for every type satisfying the supertraits, which in
/// practice means all primitive integer and floating-point types. Operations
/// needing floating-point functions additionally require
/// [`Float`][num_traits::Float].
pub trait Scalar: Num + NumAssign + Copy + Default + PartialOrd {}

impl<T: Num + NumAssign + Copy + Default + PartialOrd> Scalar for T {}

/// A vector with `N` components of scalar type `Sc`.
///
/// Components are laid out in X, Y, Z, W order with no padding, so a
/// `Vector<Sc, N>` is exactly `N * size_of::<Sc>()` bytes. Slices of vectors
/// can be reinterpreted as raw component data via [`bytemuck::cast_slice`].
///
/// `PartialEq` is exact, component-wise equality; for tolerance-based
/// comparison of floating-point vectors use [`ApproxEq`] or
/// [`approx_eq_axes`][Self::approx_eq_axes].
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Vector<Sc, const N: usize>(pub [Sc; N]);

/// A 2-vector with `f32` components by default.
pub type Vec2<Sc = f32> = Vector<Sc, 2>;
/// A 3-vector with `f32` components by default.
pub type Vec3<Sc = f32> = Vector<Sc, 3>;
/// A 4-vector with `f32` components by default.
pub type Vec4<Sc = f32> = Vector<Sc, 4>;

/// A 2-vector with `i32` components.
pub type Vec2i = Vector<i32, 2>;
/// A 3-vector with `i32` components.
pub type Vec3i = Vector<i32, 3>;
/// A 4-vector with `i32` components.
pub type Vec4i = Vector<i32, 4>;

/// A 2-vector with `u32` components.
pub type Vec2u = Vector<u32, 2>;
/// A 3-vector with `u32` components.
pub type Vec3u = Vector<u32, 3>;
/// A 4-vector with `u32` components.
pub type Vec4u = Vector<u32, 4>;

/// A 2-vector with `f64` components.
pub type Vec2d = Vector<f64, 2>;
/// A 3-vector with `f64` components.
pub type Vec3d = Vector<f64, 3>;
/// A 4-vector with `f64` components.
pub type Vec4d = Vector<f64, 4>;

/// Returns a 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2<Sc>(x: Sc, y: Sc) -> Vec2<Sc> {
    Vector([x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3<Sc>(x: Sc, y: Sc, z: Sc) -> Vec3<Sc> {
    Vector([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4<Sc>(x: Sc, y: Sc, z: Sc, w: Sc) -> Vec4<Sc> {
    Vector([x, y, z, w])
}

/// Returns a vector with all `N` components equal to `c`.
#[inline]
pub fn splat<Sc: Copy, const N: usize>(c: Sc) -> Vector<Sc, N> {
    Vector([c; N])
}

impl<Sc, const N: usize> Vector<Sc, N> {
    /// Returns a vector with the given components.
    #[inline]
    pub const fn new(components: [Sc; N]) -> Self {
        Self(components)
    }

    /// Returns the components of `self` as an array, in X, Y, Z, W order.
    #[inline]
    pub fn to_array(self) -> [Sc; N] {
        self.0
    }

    /// Returns the components of `self` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Sc] {
        &self.0
    }

    /// Returns the components of `self` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Sc] {
        &mut self.0
    }

    /// Returns `self` component-wise mapped with `f`.
    #[inline]
    pub fn map<T>(self, f: impl FnMut(Sc) -> T) -> Vector<T, N> {
        Vector(self.0.map(f))
    }

    /// Returns the component at index `i`, or `Error::IndexOutOfRange`
    /// if `i` ≥ `N`.
    pub fn try_get(&self, i: usize) -> Result<Sc, Error>
    where
        Sc: Copy,
    {
        self.0
            .get(i)
            .copied()
            .ok_or(Error::IndexOutOfRange { index: i, dim: N })
    }

    /// Sets the component at index `i` to `c`, or returns
    /// `Error::IndexOutOfRange` if `i` ≥ `N`.
    pub fn try_set(&mut self, i: usize, c: Sc) -> Result<(), Error> {
        match self.0.get_mut(i) {
            Some(slot) => {
                *slot = c;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index: i, dim: N }),
        }
    }
}

impl<Sc: Scalar, const N: usize> Vector<Sc, N> {
    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self([Sc::zero(); N])
    }

    /// Returns whether every component of `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| c.is_zero())
    }

    /// Returns the result of `f` applied component-wise to `self` and `rhs`.
    #[inline]
    pub fn zip_map(
        self,
        rhs: Self,
        mut f: impl FnMut(Sc, Sc) -> Sc,
    ) -> Self {
        Self(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    /// Returns the dot product of `self` and `rhs`.
    #[inline]
    pub fn dot(self, rhs: Self) -> Sc {
        let mut res = Sc::zero();
        for i in 0..N {
            res = res + self.0[i] * rhs.0[i];
        }
        res
    }

    /// Returns the squared length of `self`.
    ///
    /// Cheaper to compute than [`len`][Self::len]; prefer it for comparing
    /// lengths. Unlike `len`, also defined for integer scalars.
    #[inline]
    pub fn len_sqr(self) -> Sc {
        self.dot(self)
    }

    /// Returns the component-wise minimum of `self` and `rhs`.
    pub fn min(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| if b < a { b } else { a })
    }

    /// Returns the component-wise maximum of `self` and `rhs`.
    pub fn max(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| if b > a { b } else { a })
    }

    /// Returns `self` with every component clamped to `[min, max]`.
    ///
    /// If `min` > `max` the result is well defined but inverted: components
    /// below `min` become `min`, the rest become `max`. No validation is
    /// performed.
    pub fn clamp(self, min: Sc, max: Sc) -> Self {
        self.map(|c| {
            if c < min {
                min
            } else if c > max {
                max
            } else {
                c
            }
        })
    }

    /// Returns `self` clamped component-wise to the per-axis bounds
    /// `[min[i], max[i]]`.
    ///
    /// As with [`clamp`][Self::clamp], axes where `min[i]` > `max[i]` yield
    /// an inverted but well-defined result.
    pub fn clamp_vec(self, min: Self, max: Self) -> Self {
        Self(array::from_fn(|i| {
            let (c, lo, hi) = (self.0[i], min.0[i], max.0[i]);
            if c < lo {
                lo
            } else if c > hi {
                hi
            } else {
                c
            }
        }))
    }

    /// Returns a vector whose `k`-th component is `self[indices[k]]`.
    ///
    /// Components may be selected in any order and more than once, so this
    /// can reorder, duplicate, truncate, or extend:
    ///
    /// ```
    /// use vecn::{vec2, vec4};
    ///
    /// let v = vec2(1, 2);
    /// assert_eq!(v.swizzle([1, 0]), Ok(vec2(2, 1)));
    /// assert_eq!(v.swizzle([0, 0, 1, 1]), Ok(vec4(1, 1, 2, 2)));
    /// ```
    ///
    /// Every index is bounds-checked; an index ≥ `N` yields
    /// `Error::IndexOutOfRange`.
    pub fn swizzle<const M: usize>(
        &self,
        indices: [usize; M],
    ) -> Result<Vector<Sc, M>, Error> {
        for &i in &indices {
            if i >= N {
                return Err(Error::IndexOutOfRange { index: i, dim: N });
            }
        }
        Ok(Vector(indices.map(|i| self.0[i])))
    }

    /// Returns whether `self` and `other` are equal to within the per-axis
    /// tolerances given by `eps`.
    pub fn approx_eq_axes(&self, other: &Self, eps: &Self) -> bool
    where
        Sc: ApproxEq,
    {
        (0..N).all(|i| self.0[i].approx_eq_eps(&other.0[i], &eps.0[i]))
    }
}

#[cfg(feature = "fp")]
impl<Sc: Scalar + Float, const N: usize> Vector<Sc, N> {
    /// Returns the length of `self`.
    #[inline]
    pub fn len(self) -> Sc {
        self.dot(self).sqrt()
    }

    /// Returns `self` divided by its length, or `self` unchanged if its
    /// length is zero.
    ///
    /// The zero vector has no direction, so there is nothing meaningful to
    /// return; leaving it untouched keeps the operation total and lets
    /// callers detect the case with [`is_zero`][Self::is_zero] if they care.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.len();
        if len.is_zero() { self } else { self / len }
    }

    /// Normalizes `self` in place. See [`normalized`][Self::normalized].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns whether `self` has a length of (approximately) one.
    pub fn is_normalized(self) -> bool
    where
        Sc: ApproxEq,
    {
        self.len_sqr().approx_eq(&Sc::one())
    }

    /// Returns the distance between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Self) -> Sc {
        (self - other).len()
    }

    /// Returns the squared distance between `self` and `other`.
    ///
    /// Cheaper to compute than [`distance`][Self::distance]; prefer it for
    /// comparing distances.
    #[inline]
    pub fn distance_sqr(self, other: Self) -> Sc {
        (self - other).len_sqr()
    }

    /// Returns `self` reflected about the surface normal `normal`:
    ///
    /// ```text
    /// self − 2 · (self · normal) · normal
    /// ```
    ///
    /// Precondition: `normal` is normalized. This is not validated; a
    /// non-unit normal simply yields a scaled reflection.
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        let d = self.dot(normal);
        self - normal * (d + d)
    }

    /// Returns the scalar projection of `self` onto `onto`.
    ///
    /// Precondition: `onto` is not the zero vector.
    #[must_use]
    pub fn scalar_project(self, onto: Self) -> Sc {
        debug_assert!(!onto.is_zero(), "cannot project onto a zero vector");
        self.dot(onto) / onto.dot(onto)
    }

    /// Returns the vector projection of `self` onto `onto`.
    ///
    /// Precondition: `onto` is not the zero vector.
    #[must_use]
    pub fn vector_project(self, onto: Self) -> Self {
        onto * self.scalar_project(onto)
    }

    /// Returns `self` with every component raised to the power `exp`.
    pub fn pow(self, exp: Sc) -> Self {
        self.map(|c| c.powf(exp))
    }
}

impl<Sc: Copy> Vector<Sc, 2> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    /// Returns a mutable reference to the x component of `self`.
    #[inline]
    pub fn x_mut(&mut self) -> &mut Sc {
        &mut self.0[0]
    }
    /// Returns a mutable reference to the y component of `self`.
    #[inline]
    pub fn y_mut(&mut self) -> &mut Sc {
        &mut self.0[1]
    }
}

impl<Sc: Copy> Vector<Sc, 3> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> Sc {
        self.0[2]
    }
    /// Returns a mutable reference to the x component of `self`.
    #[inline]
    pub fn x_mut(&mut self) -> &mut Sc {
        &mut self.0[0]
    }
    /// Returns a mutable reference to the y component of `self`.
    #[inline]
    pub fn y_mut(&mut self) -> &mut Sc {
        &mut self.0[1]
    }
    /// Returns a mutable reference to the z component of `self`.
    #[inline]
    pub fn z_mut(&mut self) -> &mut Sc {
        &mut self.0[2]
    }
    /// Returns the cross product of `self` and `rhs`.
    pub fn cross(&self, rhs: &Self) -> Self
    where
        Sc: Scalar,
    {
        let x = self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1];
        let y = self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2];
        let z = self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0];
        Self([x, y, z])
    }
}

impl<Sc: Copy> Vector<Sc, 4> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> Sc {
        self.0[2]
    }
    /// Returns the w component of `self`.
    #[inline]
    pub fn w(&self) -> Sc {
        self.0[3]
    }
    /// Returns a mutable reference to the x component of `self`.
    #[inline]
    pub fn x_mut(&mut self) -> &mut Sc {
        &mut self.0[0]
    }
    /// Returns a mutable reference to the y component of `self`.
    #[inline]
    pub fn y_mut(&mut self) -> &mut Sc {
        &mut self.0[1]
    }
    /// Returns a mutable reference to the z component of `self`.
    #[inline]
    pub fn z_mut(&mut self) -> &mut Sc {
        &mut self.0[2]
    }
    /// Returns a mutable reference to the w component of `self`.
    #[inline]
    pub fn w_mut(&mut self) -> &mut Sc {
        &mut self.0[3]
    }
}

//
// Operator impls
//

impl<Sc: Scalar, const N: usize> Add for Vector<Sc, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}
impl<Sc: Scalar, const N: usize> AddAssign for Vector<Sc, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Sc: Scalar, const N: usize> Sub for Vector<Sc, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}
impl<Sc: Scalar, const N: usize> SubAssign for Vector<Sc, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<Sc, const N: usize> Neg for Vector<Sc, N>
where
    Sc: Scalar + Neg<Output = Sc>,
{
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<Sc: Scalar, const N: usize> Mul<Sc> for Vector<Sc, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Sc) -> Self {
        self.map(|c| c * rhs)
    }
}
impl<Sc: Scalar, const N: usize> MulAssign<Sc> for Vector<Sc, N> {
    fn mul_assign(&mut self, rhs: Sc) {
        *self = *self * rhs;
    }
}

impl<Sc: Scalar, const N: usize> Div<Sc> for Vector<Sc, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Sc) -> Self {
        self.map(|c| c / rhs)
    }
}
impl<Sc: Scalar, const N: usize> DivAssign<Sc> for Vector<Sc, N> {
    fn div_assign(&mut self, rhs: Sc) {
        *self = *self / rhs;
    }
}

// Component-wise vector-vector products and quotients
impl<Sc: Scalar, const N: usize> Mul for Vector<Sc, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a * b)
    }
}
impl<Sc: Scalar, const N: usize> MulAssign for Vector<Sc, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl<Sc: Scalar, const N: usize> Div for Vector<Sc, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a / b)
    }
}
impl<Sc: Scalar, const N: usize> DivAssign for Vector<Sc, N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Scalar-on-the-left broadcasts, per primitive type (orphan rule).
macro_rules! impl_scalar_lhs {
    ($($sc:ty),+ $(,)?) => {$(
        impl<const N: usize> Add<Vector<$sc, N>> for $sc {
            type Output = Vector<$sc, N>;
            #[inline]
            fn add(self, rhs: Vector<$sc, N>) -> Self::Output {
                rhs.map(|c| self + c)
            }
        }
        impl<const N: usize> Sub<Vector<$sc, N>> for $sc {
            type Output = Vector<$sc, N>;
            #[inline]
            fn sub(self, rhs: Vector<$sc, N>) -> Self::Output {
                rhs.map(|c| self - c)
            }
        }
        impl<const N: usize> Mul<Vector<$sc, N>> for $sc {
            type Output = Vector<$sc, N>;
            #[inline]
            fn mul(self, rhs: Vector<$sc, N>) -> Self::Output {
                rhs * self
            }
        }
        impl<const N: usize> Div<Vector<$sc, N>> for $sc {
            type Output = Vector<$sc, N>;
            #[inline]
            fn div(self, rhs: Vector<$sc, N>) -> Self::Output {
                rhs.map(|c| self / c)
            }
        }
    )+};
}

impl_scalar_lhs!(
    f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize,
);

//
// Foreign trait impls
//

impl<Sc: Scalar, const N: usize> Default for Vector<Sc, N> {
    /// Returns the zero vector.
    fn default() -> Self {
        Self::zero()
    }
}

impl<Sc, const N: usize> Index<usize> for Vector<Sc, N> {
    type Output = Sc;
    /// Returns the component of `self` at index `i`.
    ///
    /// # Panics
    /// If `i` ≥ `N`. See [`try_get`][Self::try_get] for a checked variant.
    #[inline]
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<Sc, const N: usize> IndexMut<usize> for Vector<Sc, N> {
    /// Returns a mutable reference to the component of `self` at index `i`.
    ///
    /// # Panics
    /// If `i` ≥ `N`. See [`try_set`][Self::try_set] for a checked variant.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Sc {
        &mut self.0[i]
    }
}

impl<Sc, const N: usize> From<[Sc; N]> for Vector<Sc, N> {
    #[inline]
    fn from(components: [Sc; N]) -> Self {
        Self(components)
    }
}

impl<Sc, const N: usize> From<Vector<Sc, N>> for [Sc; N] {
    #[inline]
    fn from(v: Vector<Sc, N>) -> Self {
        v.0
    }
}

impl<Sc> From<(Sc, Sc)> for Vector<Sc, 2> {
    #[inline]
    fn from((x, y): (Sc, Sc)) -> Self {
        vec2(x, y)
    }
}

impl<Sc> From<(Sc, Sc, Sc)> for Vector<Sc, 3> {
    #[inline]
    fn from((x, y, z): (Sc, Sc, Sc)) -> Self {
        vec3(x, y, z)
    }
}

impl<Sc> From<(Sc, Sc, Sc, Sc)> for Vector<Sc, 4> {
    #[inline]
    fn from((x, y, z, w): (Sc, Sc, Sc, Sc)) -> Self {
        vec4(x, y, z, w)
    }
}

impl<Sc: Scalar, const N: usize> TryFrom<&[Sc]> for Vector<Sc, N> {
    type Error = Error;

    /// Converts a slice of exactly `N` scalars into a vector.
    ///
    /// Fails with `Error::Length` if `slice` has any other length.
    fn try_from(slice: &[Sc]) -> Result<Self, Error> {
        if slice.len() != N {
            return Err(Error::Length { expected: N, actual: slice.len() });
        }
        let mut res = Self::zero();
        res.0.copy_from_slice(slice);
        Ok(res)
    }
}

impl<Sc, const N: usize> ApproxEq<Self, Sc> for Vector<Sc, N>
where
    Sc: ApproxEq + Copy,
{
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Sc) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> Sc {
        Sc::relative_epsilon()
    }
}

// SAFETY: repr(transparent) over [Sc; N]; no padding if Sc has none.
unsafe impl<Sc: Zeroable, const N: usize> Zeroable for Vector<Sc, N> {}
unsafe impl<Sc: Pod, const N: usize> Pod for Vector<Sc, N> {}

impl<Sc: Debug, const N: usize> Debug for Vector<Sc, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}", N)?;
        Debug::fmt(&self.0, f)
    }
}

impl<Sc: Display, const N: usize> Display for Vector<Sc, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if let Some(p) = f.precision() {
                write!(f, "{c:.p$}")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        f.write_str(")")
    }
}
