//! Gram-Schmidt orthogonalization of vector sequences.

use num_traits::Float;

use crate::Error;
use crate::vec::{Scalar, Vector};

/// Makes the vectors in `src` mutually orthogonal, writing the result to
/// the first `src.len()` elements of `dst`.
///
/// Uses the modified Gram-Schmidt process: `dst[0]` is `src[0]` unchanged,
/// and each subsequent `src[i]` has its projection onto every previously
/// computed `dst[r]` subtracted from it. Projections onto a zero vector
/// (which arises when `src[i]` is linearly dependent on its predecessors)
/// are skipped.
///
/// Like any Gram-Schmidt variant, numerical accuracy decreases with the
/// index `i`: rounding errors accrued in earlier output vectors feed into
/// the projections of later ones, so the last vectors of a long input are
/// the least reliably orthogonal.
///
/// Fails with `Error::Length` if `dst` has fewer elements than `src`.
/// Elements of `dst` past `src.len()` are left untouched.
///
/// # Examples
/// ```
/// use vecn::{orthogonalize, vec2, Vec2};
///
/// let src = [vec2(2.0, 0.0), vec2(1.0, 1.0)];
/// let mut dst = [Vec2::zero(); 2];
/// orthogonalize(&mut dst, &src).unwrap();
/// assert_eq!(dst, [vec2(2.0, 0.0), vec2(0.0, 1.0)]);
/// ```
pub fn orthogonalize<Sc: Scalar + Float, const N: usize>(
    dst: &mut [Vector<Sc, N>],
    src: &[Vector<Sc, N>],
) -> Result<(), Error> {
    if dst.len() < src.len() {
        return Err(Error::Length {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    for i in 0..src.len() {
        let mut v = src[i];
        for r in 0..i {
            let denom = dst[r].dot(dst[r]);
            if !denom.is_zero() {
                v = v - dst[r] * (dst[r].dot(v) / denom);
            }
        }
        dst[i] = v;
    }
    Ok(())
}

/// Makes the vectors in `src` mutually orthogonal and unit-length, writing
/// the result to the first `src.len()` elements of `dst`.
///
/// Like [`orthogonalize`], but every previously computed `dst[r]` is
/// already unit length, so the projection simplifies to a plain dot
/// product, and each output vector is normalized before it is stored. An
/// intermediate vector of zero length (a linearly dependent input) is
/// stored as the zero vector, following the normalization policy of
/// [`Vector::normalized`].
///
/// The caveat about decreasing numerical accuracy on [`orthogonalize`]
/// applies here as well.
///
/// Fails with `Error::Length` if `dst` has fewer elements than `src`.
pub fn orthonormalize<Sc: Scalar + Float, const N: usize>(
    dst: &mut [Vector<Sc, N>],
    src: &[Vector<Sc, N>],
) -> Result<(), Error> {
    if dst.len() < src.len() {
        return Err(Error::Length {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    for i in 0..src.len() {
        let mut v = src[i];
        for r in 0..i {
            v = v - dst[r] * dst[r].dot(v);
        }
        dst[i] = v.normalized();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::vec::{Vec3, vec2, vec3};

    use super::*;

    #[test]
    fn orthogonalize_keeps_first_vector() {
        let src = [vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)];
        let mut dst = [Vec3::zero(); 2];
        orthogonalize(&mut dst, &src).unwrap();
        assert_eq!(dst[0], src[0]);
    }

    #[test]
    fn orthogonalized_vectors_are_mutually_orthogonal() {
        let src = [
            vec3(1.0, 1.0, 0.0),
            vec3(1.0, 0.0, 1.0),
            vec3(0.0, 1.0, 1.0),
        ];
        let mut dst = [Vec3::zero(); 3];
        orthogonalize(&mut dst, &src).unwrap();

        for i in 0..3 {
            for r in 0..i {
                assert_approx_eq!(dst[i].dot(dst[r]), 0.0, eps = 1e-6);
            }
        }
    }

    #[test]
    fn orthogonalize_is_identity_on_orthogonal_input() {
        let src = [vec3(2.0, 0.0, 0.0), vec3(0.0, 3.0, 0.0)];
        let mut dst = [Vec3::zero(); 2];
        orthogonalize(&mut dst, &src).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn orthogonalize_skips_dependent_vectors() {
        // Second vector is parallel to the first; orthogonalization
        // cancels it to zero, and the third must still come out orthogonal.
        let src = [
            vec3(1.0, 0.0, 0.0),
            vec3(2.0, 0.0, 0.0),
            vec3(1.0, 1.0, 0.0),
        ];
        let mut dst = [Vec3::zero(); 3];
        orthogonalize(&mut dst, &src).unwrap();

        assert!(dst[1].is_zero());
        assert_approx_eq!(dst[2].dot(dst[0]), 0.0);
    }

    #[test]
    fn orthonormalized_vectors_are_unit_length() {
        let src = [
            vec3(1.0, 1.0, 0.0),
            vec3(1.0, 0.0, 1.0),
            vec3(0.0, 1.0, 1.0),
        ];
        let mut dst = [Vec3::zero(); 3];
        orthonormalize(&mut dst, &src).unwrap();

        for i in 0..3 {
            assert_approx_eq!(dst[i].len_sqr(), 1.0, eps = 1e-5);
            for r in 0..i {
                assert_approx_eq!(dst[i].dot(dst[r]), 0.0, eps = 1e-6);
            }
        }
    }

    #[test]
    fn orthonormalize_stores_zero_for_dependent_vector() {
        let src = [vec2(1.0, 0.0), vec2(3.0, 0.0)];
        let mut dst = [vec2(9.0, 9.0); 2];
        orthonormalize(&mut dst, &src).unwrap();
        assert_eq!(dst[0], vec2(1.0, 0.0));
        assert!(dst[1].is_zero());
    }

    #[test]
    fn too_small_destination_fails() {
        let src = [vec2(1.0, 0.0), vec2(0.0, 1.0)];
        let mut dst = [vec2(0.0, 0.0); 1];
        assert_eq!(
            orthogonalize(&mut dst, &src),
            Err(Error::Length { expected: 2, actual: 1 })
        );
        assert_eq!(
            orthonormalize(&mut dst, &src),
            Err(Error::Length { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn excess_destination_elements_are_untouched() {
        let src = [vec2(1.0, 2.0)];
        let mut dst = [vec2(7.0, 7.0); 3];
        orthogonalize(&mut dst, &src).unwrap();
        assert_eq!(dst[0], vec2(1.0, 2.0));
        assert_eq!(dst[1], vec2(7.0, 7.0));
        assert_eq!(dst[2], vec2(7.0, 7.0));
    }
}
