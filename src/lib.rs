//! Fixed-dimension vector math over generic scalars.
//!
//! The centerpiece is [`Vector<Sc, N>`][vec::Vector], a value type holding
//! `N` components of any scalar type `Sc`: the usual arithmetic operators,
//! dot product, length, normalization, clamping, swizzling, and a family of
//! interpolators (lerp, smoothstep, Hermite, Catmull-Rom, barycentric), plus
//! Gram-Schmidt orthogonalization over slices of vectors.
//!
//! Rather than stamping out one struct per scalar type and dimension, the
//! whole operation set is written once, generic over the scalar (via
//! [`num_traits`]) and over the dimension (via const generics). Operations
//! that only make sense for certain scalars are constrained accordingly:
//! negation exists only where the scalar is signed, and length, normalization
//! and interpolation only where it is a floating-point type.
//!
//! Vectors are `#[repr(transparent)]` over `[Sc; N]` and implement
//! [`bytemuck::Pod`], so slices of them can be safely viewed as raw bytes
//! for interop with native buffers.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring floating-point functions not included
//!   in `core`, using their `std` implementations. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate, for use in `no_std`
//!   environments.
//!
//! If neither feature is enabled, the crate only exposes the operations
//! implementable in pure `core`: construction, arithmetic, dot product,
//! squared length, clamping, swizzling, and (approximate) equality.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

use thiserror::Error;

pub mod approx;
#[cfg(feature = "fp")]
pub mod interp;
#[cfg(feature = "fp")]
pub mod ortho;
pub mod vec;

pub use approx::ApproxEq;
#[cfg(feature = "fp")]
pub use interp::{
    Lerp, barycentric, catmull_rom, hermite, inv_lerp, lerp, smootherstep,
    smoothstep,
};
#[cfg(feature = "fp")]
pub use ortho::{orthogonalize, orthonormalize};
pub use vec::{
    Scalar, Vec2, Vec2d, Vec2i, Vec2u, Vec3, Vec3d, Vec3i, Vec3u, Vec4, Vec4d,
    Vec4i, Vec4u, Vector, splat, vec2, vec3, vec4,
};

/// The error type of fallible vector operations.
///
/// Every failure is a synchronous, local precondition violation at the call
/// site; there is nothing to retry or recover. Arithmetic errors such as
/// integer overflow or division by zero are surfaced by the scalar type's
/// own semantics, not wrapped in this type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A slice had the wrong number of elements for the operation.
    #[error("expected {expected} elements, got {actual}")]
    Length {
        /// The number of elements required.
        expected: usize,
        /// The number of elements actually present.
        actual: usize,
    },
    /// A component index was outside the range `0..dim`.
    #[error("component index {index} out of range for a {dim}-vector")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The dimension of the vector.
        dim: usize,
    },
}
