//! Numeric payloads carried by a [`Quantity`](crate::Quantity).
//!
//! A payload is either a floating-point scalar ([`Real`]: `f32`, `f64`) or a small vector of
//! them ([`Vector2`], [`Vector3`]). Vectors are `#[repr(C)]`, so a vector payload has exactly the
//! layout of `[S; N]` and converts to and from arrays at no cost.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Float, NumCast};

/// Floating-point element type of a payload.
pub trait Real:
    Float + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Converts an `f64` conversion factor into this element type (rounding for `f32`).
    fn from_f64(value: f64) -> Self;

    /// Widens or keeps this value as `f64`.
    fn as_f64(self) -> f64;
}

impl Real for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// Component-wise access to a scalar or vector payload.
pub trait Payload: Copy + PartialEq + Default + fmt::Debug {
    /// Element type.
    type Scalar: Real;

    /// The same shape with another element type.
    type WithScalar<W: Real>: Payload<Scalar = W>;

    /// Number of components (1, 2 or 3).
    const AXES: usize;

    /// Every component set to `value`.
    fn splat(value: Self::Scalar) -> Self;

    /// Applies `f` to every component.
    fn map<F: FnMut(Self::Scalar) -> Self::Scalar>(self, f: F) -> Self;

    /// Combines matching components of `self` and `other`.
    fn zip_map<F: FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar>(self, other: Self, f: F)
        -> Self;

    /// Whether `f` holds for at least one component.
    fn any<F: FnMut(Self::Scalar) -> bool>(self, f: F) -> bool;

    /// Casts every component, failing if any component does not fit.
    fn cast<W: Real>(self) -> Option<Self::WithScalar<W>>;
}

impl<T: Real> Payload for T {
    type Scalar = T;
    type WithScalar<W: Real> = W;
    const AXES: usize = 1;

    #[inline]
    fn splat(value: T) -> Self {
        value
    }

    #[inline]
    fn map<F: FnMut(T) -> T>(self, mut f: F) -> Self {
        f(self)
    }

    #[inline]
    fn zip_map<F: FnMut(T, T) -> T>(self, other: Self, mut f: F) -> Self {
        f(self, other)
    }

    #[inline]
    fn any<F: FnMut(T) -> bool>(self, mut f: F) -> bool {
        f(self)
    }

    #[inline]
    fn cast<W: Real>(self) -> Option<W> {
        <W as NumCast>::from(self)
    }
}

/// Two-component numeric vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<S> {
    /// First component.
    pub x: S,
    /// Second component.
    pub y: S,
}

/// Three-component numeric vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<S> {
    /// First component.
    pub x: S,
    /// Second component.
    pub y: S,
    /// Third component.
    pub z: S,
}

impl<S> Vector2<S> {
    /// Builds a vector from its components.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

impl<S> Vector3<S> {
    /// Builds a vector from its components.
    #[inline]
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }
}

impl<S: Real> Vector2<S> {
    /// Scalar product.
    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y
    }

    /// Appends a third component.
    #[inline]
    pub fn extend(self, z: S) -> Vector3<S> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<S: Real> Vector3<S> {
    /// Scalar product.
    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Vector product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Drops the third component.
    #[inline]
    pub fn truncate(self) -> Vector2<S> {
        Vector2::new(self.x, self.y)
    }
}

/// Payloads with a Euclidean norm.
pub trait VectorPayload: Payload {
    /// Scalar product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Euclidean length.
    #[inline]
    fn norm(self) -> Self::Scalar {
        self.dot(self).sqrt()
    }
}

impl<S: Real> VectorPayload for Vector2<S> {
    #[inline]
    fn dot(self, other: Self) -> S {
        Vector2::dot(self, other)
    }
}

impl<S: Real> VectorPayload for Vector3<S> {
    #[inline]
    fn dot(self, other: Self) -> S {
        Vector3::dot(self, other)
    }
}

impl<S: Real> Payload for Vector2<S> {
    type Scalar = S;
    type WithScalar<W: Real> = Vector2<W>;
    const AXES: usize = 2;

    #[inline]
    fn splat(value: S) -> Self {
        Self::new(value, value)
    }

    #[inline]
    fn map<F: FnMut(S) -> S>(self, mut f: F) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    #[inline]
    fn zip_map<F: FnMut(S, S) -> S>(self, other: Self, mut f: F) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y))
    }

    #[inline]
    fn any<F: FnMut(S) -> bool>(self, mut f: F) -> bool {
        f(self.x) || f(self.y)
    }

    #[inline]
    fn cast<W: Real>(self) -> Option<Vector2<W>> {
        Some(Vector2::new(
            <W as NumCast>::from(self.x)?,
            <W as NumCast>::from(self.y)?,
        ))
    }
}

impl<S: Real> Payload for Vector3<S> {
    type Scalar = S;
    type WithScalar<W: Real> = Vector3<W>;
    const AXES: usize = 3;

    #[inline]
    fn splat(value: S) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    fn map<F: FnMut(S) -> S>(self, mut f: F) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    #[inline]
    fn zip_map<F: FnMut(S, S) -> S>(self, other: Self, mut f: F) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    #[inline]
    fn any<F: FnMut(S) -> bool>(self, mut f: F) -> bool {
        f(self.x) || f(self.y) || f(self.z)
    }

    #[inline]
    fn cast<W: Real>(self) -> Option<Vector3<W>> {
        Some(Vector3::new(
            <W as NumCast>::from(self.x)?,
            <W as NumCast>::from(self.y)?,
            <W as NumCast>::from(self.z)?,
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component-wise arithmetic
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! vector_ops {
    ($vec:ident { $($c:ident),+ }) => {
        impl<S: Add<Output = S>> Add for $vec<S> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $vec { $($c: self.$c + rhs.$c),+ }
            }
        }

        impl<S: Sub<Output = S>> Sub for $vec<S> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $vec { $($c: self.$c - rhs.$c),+ }
            }
        }

        impl<S: Mul<Output = S>> Mul for $vec<S> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                $vec { $($c: self.$c * rhs.$c),+ }
            }
        }

        impl<S: Div<Output = S>> Div for $vec<S> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                $vec { $($c: self.$c / rhs.$c),+ }
            }
        }

        impl<S: Neg<Output = S>> Neg for $vec<S> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                $vec { $($c: -self.$c),+ }
            }
        }

        impl<S: AddAssign> AddAssign for $vec<S> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$c += rhs.$c;)+
            }
        }

        impl<S: SubAssign> SubAssign for $vec<S> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$c -= rhs.$c;)+
            }
        }

        impl<S: Add<Output = S> + Default> Sum for $vec<S> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::default(), |acc, v| acc + v)
            }
        }

        vector_ops!(@scalar $vec { $($c),+ } f32);
        vector_ops!(@scalar $vec { $($c),+ } f64);
    };
    (@scalar $vec:ident { $($c:ident),+ } $t:ty) => {
        impl Mul<$t> for $vec<$t> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $t) -> Self {
                $vec { $($c: self.$c * rhs),+ }
            }
        }

        impl Mul<$vec<$t>> for $t {
            type Output = $vec<$t>;
            #[inline]
            fn mul(self, rhs: $vec<$t>) -> $vec<$t> {
                rhs * self
            }
        }

        impl Div<$t> for $vec<$t> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $t) -> Self {
                $vec { $($c: self.$c / rhs),+ }
            }
        }

        impl MulAssign<$t> for $vec<$t> {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                $(self.$c *= rhs;)+
            }
        }

        impl DivAssign<$t> for $vec<$t> {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                $(self.$c /= rhs;)+
            }
        }
    };
}

vector_ops!(Vector2 { x, y });
vector_ops!(Vector3 { x, y, z });

// ─────────────────────────────────────────────────────────────────────────────
// Array and widening conversions
// ─────────────────────────────────────────────────────────────────────────────

impl<S> From<[S; 2]> for Vector2<S> {
    #[inline]
    fn from([x, y]: [S; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<S> From<Vector2<S>> for [S; 2] {
    #[inline]
    fn from(v: Vector2<S>) -> Self {
        [v.x, v.y]
    }
}

impl<S> From<[S; 3]> for Vector3<S> {
    #[inline]
    fn from([x, y, z]: [S; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<S> From<Vector3<S>> for [S; 3] {
    #[inline]
    fn from(v: Vector3<S>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<Vector2<f32>> for Vector2<f64> {
    #[inline]
    fn from(v: Vector2<f32>) -> Self {
        Self::new(v.x.into(), v.y.into())
    }
}

impl From<Vector3<f32>> for Vector3<f64> {
    #[inline]
    fn from(v: Vector3<f32>) -> Self {
        Self::new(v.x.into(), v.y.into(), v.z.into())
    }
}

impl<S: fmt::Display> fmt::Display for Vector2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y, f)?;
        f.write_str(")")
    }
}

impl<S: fmt::Display> fmt::Display for Vector3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.z, f)?;
        f.write_str(")")
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_interop {
    use super::{Real, Vector2, Vector3};

    impl<S: Real> From<Vector2<S>> for nalgebra::Vector2<S> {
        fn from(v: Vector2<S>) -> Self {
            nalgebra::Vector2::new(v.x, v.y)
        }
    }

    impl<S: Real> From<nalgebra::Vector2<S>> for Vector2<S> {
        fn from(v: nalgebra::Vector2<S>) -> Self {
            Vector2::new(v[0], v[1])
        }
    }

    impl<S: Real> From<Vector3<S>> for nalgebra::Vector3<S> {
        fn from(v: Vector3<S>) -> Self {
            nalgebra::Vector3::new(v.x, v.y, v.z)
        }
    }

    impl<S: Real> From<nalgebra::Vector3<S>> for Vector3<S> {
        fn from(v: nalgebra::Vector3<S>) -> Self {
            Vector3::new(v[0], v[1], v[2])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::mem::{align_of, size_of};

    #[test]
    fn vector_layout_matches_arrays() {
        assert_eq!(size_of::<Vector2<f32>>(), size_of::<[f32; 2]>());
        assert_eq!(size_of::<Vector3<f64>>(), size_of::<[f64; 3]>());
        assert_eq!(align_of::<Vector3<f64>>(), align_of::<[f64; 3]>());
    }

    #[test]
    fn component_wise_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn dot_cross_norm() {
        let x = Vector3::new(1.0_f64, 0.0, 0.0);
        let y = Vector3::new(0.0_f64, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(x.dot(y), 0.0);
        assert_abs_diff_eq!(Vector2::new(3.0_f64, 4.0).norm(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn slicing_between_2_and_3_axes() {
        let v = Vector3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(v.truncate(), Vector2::new(1.0, 2.0));
        assert_eq!(v.truncate().extend(9.0), Vector3::new(1.0, 2.0, 9.0));
    }

    #[test]
    fn payload_helpers() {
        let v = Vector2::new(-1.5_f64, 2.0);
        assert_eq!(v.map(f64::abs), Vector2::new(1.5, 2.0));
        assert!(v.any(|c| c < 0.0));
        assert_eq!(<Vector2<f64> as Payload>::splat(0.5), Vector2::new(0.5, 0.5));
        assert_eq!(v.cast::<f32>(), Some(Vector2::new(-1.5_f32, 2.0)));
        assert_eq!(<f64 as Payload>::AXES, 1);
    }

    #[test]
    fn array_round_trip() {
        let v: Vector3<f64> = [1.0, 2.0, 3.0].into();
        let a: [f64; 3] = v.into();
        assert_eq!(a, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn display_vectors() {
        assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
        assert_eq!(format!("{:.1}", Vector2::new(1.0, 2.0)), "(1.0, 2.0)");
    }

    #[cfg(feature = "nalgebra")]
    #[test]
    fn nalgebra_round_trip() {
        let v = Vector3::new(1.0_f64, -2.0, 0.5);
        let n: nalgebra::Vector3<f64> = v.into();
        assert_eq!(n, nalgebra::Vector3::new(1.0, -2.0, 0.5));
        assert_abs_diff_eq!(n.norm(), v.norm(), epsilon = 1e-12);
        assert_eq!(Vector3::from(n), v);

        let p: nalgebra::Vector2<f32> = Vector2::new(3.0_f32, 4.0).into();
        assert_eq!(Vector2::from(p), Vector2::new(3.0, 4.0));
    }
}
