//! Operations specific to vector quantities.
//!
//! A vector quantity is a [`Quantity`] whose payload is a [`Vector2`] or [`Vector3`]. Everything
//! that works on scalar quantities works component-wise here; this module adds the geometric
//! operations and the moves between a vector quantity and its per-axis scalar quantities.

use core::ops::Mul;

use typenum::Prod;

use crate::dimension::{Collapse, Collapsed};
use crate::payload::{Real, Vector2, Vector3, VectorPayload};
use crate::quantity::Quantity;

impl<D, V: VectorPayload> Quantity<D, V> {
    /// Scalar product; the dimensions multiply.
    ///
    /// ```rust
    /// use dimsafe_core::units::length::METER;
    /// use dimsafe_core::units::mechanics::NEWTON;
    ///
    /// let work = NEWTON.of_xy(3.0, 0.0).dot(METER.of_xy(2.0, 5.0));
    /// assert_eq!(work.value(), 6.0);
    /// ```
    #[inline]
    pub fn dot<D2>(self, other: Quantity<D2, V>) -> Collapsed<Prod<D, D2>, V::Scalar>
    where
        D: Mul<D2>,
        Prod<D, D2>: Collapse<V::Scalar>,
    {
        <Prod<D, D2> as Collapse<V::Scalar>>::collapse(self.value().dot(other.value()))
    }

    /// Euclidean length, same dimension.
    #[inline]
    pub fn norm(self) -> Quantity<D, V::Scalar> {
        Quantity::from_base(self.value().norm())
    }

    /// Unit direction vector, dimensionless. A zero vector gives NaN components.
    #[inline]
    pub fn normalize(self) -> V {
        let n = self.value().norm();
        self.value().map(|c| c / n)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> Quantity<D, V::Scalar> {
        let diff = self.value().zip_map(other.value(), |a, b| a - b);
        Quantity::from_base(diff.norm())
    }
}

impl<D, S: Real> Quantity<D, Vector2<S>> {
    /// Builds a vector quantity from per-axis quantities.
    #[inline]
    pub fn from_axes(x: Quantity<D, S>, y: Quantity<D, S>) -> Self {
        Quantity::from_base(Vector2::new(x.value(), y.value()))
    }

    /// Splits into per-axis quantities.
    #[inline]
    pub fn axes(self) -> [Quantity<D, S>; 2] {
        [self.x(), self.y()]
    }

    /// First axis.
    #[inline]
    pub fn x(self) -> Quantity<D, S> {
        Quantity::from_base(self.value().x)
    }

    /// Second axis.
    #[inline]
    pub fn y(self) -> Quantity<D, S> {
        Quantity::from_base(self.value().y)
    }

    /// Appends a third axis.
    #[inline]
    pub fn extend(self, z: Quantity<D, S>) -> Quantity<D, Vector3<S>> {
        Quantity::from_base(self.value().extend(z.value()))
    }

    /// Base-unit components as an array.
    #[inline]
    pub fn to_array(self) -> [S; 2] {
        self.value().into()
    }

    /// Vector quantity from base-unit components.
    #[inline]
    pub fn from_array(components: [S; 2]) -> Self {
        Quantity::from_base(components.into())
    }
}

impl<D, S: Real> Quantity<D, Vector3<S>> {
    /// Builds a vector quantity from per-axis quantities.
    ///
    /// ```rust
    /// use dimsafe_core::{Quantity, Vector3};
    /// use dimsafe_core::units::length::{KILOMETER, METER};
    ///
    /// let p = Quantity::<_, Vector3<f64>>::from_axes(METER.of(1.0), KILOMETER.of(2.0), METER.of(-3.0));
    /// assert_eq!(p.to_array(), [1.0, 2000.0, -3.0]);
    /// assert_eq!(p.axes()[1], KILOMETER.of(2.0));
    /// ```
    #[inline]
    pub fn from_axes(x: Quantity<D, S>, y: Quantity<D, S>, z: Quantity<D, S>) -> Self {
        Quantity::from_base(Vector3::new(x.value(), y.value(), z.value()))
    }

    /// Splits into per-axis quantities.
    #[inline]
    pub fn axes(self) -> [Quantity<D, S>; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// First axis.
    #[inline]
    pub fn x(self) -> Quantity<D, S> {
        Quantity::from_base(self.value().x)
    }

    /// Second axis.
    #[inline]
    pub fn y(self) -> Quantity<D, S> {
        Quantity::from_base(self.value().y)
    }

    /// Third axis.
    #[inline]
    pub fn z(self) -> Quantity<D, S> {
        Quantity::from_base(self.value().z)
    }

    /// Drops the third axis.
    #[inline]
    pub fn truncate(self) -> Quantity<D, Vector2<S>> {
        Quantity::from_base(self.value().truncate())
    }

    /// Vector product; the dimensions multiply.
    ///
    /// ```rust
    /// use dimsafe_core::units::length::METER;
    /// use dimsafe_core::units::mechanics::NEWTON;
    ///
    /// let torque = METER.of_xyz(1.0, 0.0, 0.0).cross(NEWTON.of_xyz(0.0, 2.0, 0.0));
    /// assert_eq!(torque.to_array(), [0.0, 0.0, 2.0]);
    /// ```
    #[inline]
    pub fn cross<D2>(self, other: Quantity<D2, Vector3<S>>) -> Collapsed<Prod<D, D2>, Vector3<S>>
    where
        D: Mul<D2>,
        Prod<D, D2>: Collapse<Vector3<S>>,
    {
        <Prod<D, D2> as Collapse<Vector3<S>>>::collapse(self.value().cross(other.value()))
    }

    /// Base-unit components as an array.
    #[inline]
    pub fn to_array(self) -> [S; 3] {
        self.value().into()
    }

    /// Vector quantity from base-unit components.
    #[inline]
    pub fn from_array(components: [S; 3]) -> Self {
        Quantity::from_base(components.into())
    }
}
