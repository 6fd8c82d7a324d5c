//! Unit values and conversion ratios.
//!
//! A [`Unit`] is a small `Copy` value that knows how to turn raw numbers expressed in that unit
//! into a [`Quantity`] (always stored in SI base units) and back again. The conversion itself is
//! the [`Ratio`] parameter:
//!
//! * [`Scale`]: multiplicative, `base = raw * factor`. Most units.
//! * [`Affine`]: offset then scale, `base = (raw + offset) * factor`. Celsius, Fahrenheit.
//!
//! Scale units compose with `*` and `/` (or the const [`Unit::times`] / [`Unit::per`]); affine
//! units do not, so `CELSIUS * METER` is a compile error.
//!
//! ```rust
//! use dimsafe_core::units::length::KILOMETER;
//! use dimsafe_core::units::time::HOUR;
//!
//! let kmh = KILOMETER / HOUR;
//! let v = kmh.of(36.0_f64);
//! assert!((v.value() - 10.0).abs() < 1e-12);
//! assert!((kmh.value_of(v) - 36.0).abs() < 1e-12);
//! ```
//!
//! ```rust,compile_fail
//! use dimsafe_core::units::length::METER;
//! use dimsafe_core::units::temperature::CELSIUS;
//!
//! let _ = CELSIUS * METER;
//! ```
//!
//! ```rust,compile_fail
//! use dimsafe_core::units::length::METER;
//! use dimsafe_core::units::temperature::CELSIUS;
//!
//! let _ = CELSIUS.times(METER);
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Div, Mul};

use typenum::{Prod, Quot, N1, P2, P3};

use crate::dimension::{DimPow, Dimension, Dimensionless, Powered};
use crate::payload::{Payload, Real, Vector2, Vector3};
use crate::quantity::Quantity;
use crate::registry::UnitRow;

/// Conversion between raw numbers in some unit and base SI values.
pub trait Ratio: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Raw number in this unit → base SI value.
    fn to_base<S: Real>(&self, raw: S) -> S;

    /// Base SI value → raw number in this unit.
    fn to_raw<S: Real>(&self, base: S) -> S;

    /// Type-erased copy, as stored in unit tables.
    fn kind(&self) -> RatioKind;
}

/// Multiplicative conversion, `base = raw * factor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    /// Size of one unit in base SI units.
    pub factor: f64,
}

/// Offset-then-scale conversion, `base = (raw + offset) * factor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    /// Added to the raw number before scaling.
    pub offset: f64,
    /// Size of one unit step in base SI units.
    pub factor: f64,
}

/// Run-time form of a conversion, for tables and the text parser.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RatioKind {
    /// See [`Scale`].
    Scale {
        /// Size of one unit in base SI units.
        factor: f64,
    },
    /// See [`Affine`].
    Affine {
        /// Added to the raw number before scaling.
        offset: f64,
        /// Size of one unit step in base SI units.
        factor: f64,
    },
}

impl RatioKind {
    /// Scale factor of the conversion.
    pub const fn factor(&self) -> f64 {
        match *self {
            RatioKind::Scale { factor } | RatioKind::Affine { factor, .. } => factor,
        }
    }

    /// Whether the conversion carries an offset.
    pub const fn is_affine(&self) -> bool {
        matches!(self, RatioKind::Affine { .. })
    }
}

impl Ratio for Scale {
    #[inline]
    fn to_base<S: Real>(&self, raw: S) -> S {
        raw * S::from_f64(self.factor)
    }

    #[inline]
    fn to_raw<S: Real>(&self, base: S) -> S {
        base / S::from_f64(self.factor)
    }

    #[inline]
    fn kind(&self) -> RatioKind {
        RatioKind::Scale {
            factor: self.factor,
        }
    }
}

impl Ratio for Affine {
    #[inline]
    fn to_base<S: Real>(&self, raw: S) -> S {
        (raw + S::from_f64(self.offset)) * S::from_f64(self.factor)
    }

    #[inline]
    fn to_raw<S: Real>(&self, base: S) -> S {
        base / S::from_f64(self.factor) - S::from_f64(self.offset)
    }

    #[inline]
    fn kind(&self) -> RatioKind {
        RatioKind::Affine {
            offset: self.offset,
            factor: self.factor,
        }
    }
}

impl Ratio for RatioKind {
    #[inline]
    fn to_base<S: Real>(&self, raw: S) -> S {
        match *self {
            RatioKind::Scale { factor } => Scale { factor }.to_base(raw),
            RatioKind::Affine { offset, factor } => Affine { offset, factor }.to_base(raw),
        }
    }

    #[inline]
    fn to_raw<S: Real>(&self, base: S) -> S {
        match *self {
            RatioKind::Scale { factor } => Scale { factor }.to_raw(base),
            RatioKind::Affine { offset, factor } => Affine { offset, factor }.to_raw(base),
        }
    }

    #[inline]
    fn kind(&self) -> RatioKind {
        *self
    }
}

/// A unit of dimension `D` with conversion `R`.
pub struct Unit<D, R = Scale> {
    ratio: R,
    dim: PhantomData<D>,
}

impl<D, R: Copy> Clone for Unit<D, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, R: Copy> Copy for Unit<D, R> {}

impl<D, R: PartialEq> PartialEq for Unit<D, R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ratio == other.ratio
    }
}

impl<D: Dimension, R: fmt::Debug> fmt::Debug for Unit<D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("ratio", &self.ratio)
            .field("dimension", &format_args!("{}", D::EXPONENTS))
            .finish()
    }
}

/// The identity unit: raw numbers pass through unchanged.
pub const ONE: Unit<Dimensionless> = Unit::scaled(1.0);

impl<D> Unit<D, Scale> {
    /// A unit worth `factor` base SI units.
    #[inline]
    pub const fn scaled(factor: f64) -> Self {
        Self {
            ratio: Scale { factor },
            dim: PhantomData,
        }
    }

    /// Size of one unit in base SI units.
    #[inline]
    pub const fn factor(self) -> f64 {
        self.ratio.factor
    }

    /// The same dimension, `k` times larger.
    ///
    /// ```rust
    /// use dimsafe_core::units::length::{FOOT, INCH};
    ///
    /// assert_eq!(INCH.scaled_by(12.0).factor(), FOOT.factor());
    /// ```
    #[inline]
    pub const fn scaled_by(self, k: f64) -> Self {
        Unit::scaled(self.ratio.factor * k)
    }

    /// Product unit, usable in `const` items.
    #[inline]
    pub const fn times<D2>(self, other: Unit<D2, Scale>) -> Unit<Prod<D, D2>, Scale>
    where
        D: Mul<D2>,
    {
        Unit::scaled(self.ratio.factor * other.ratio.factor)
    }

    /// Quotient unit, usable in `const` items.
    #[inline]
    pub const fn per<D2>(self, other: Unit<D2, Scale>) -> Unit<Quot<D, D2>, Scale>
    where
        D: Div<D2>,
    {
        Unit::scaled(self.ratio.factor / other.ratio.factor)
    }

    /// The unit squared.
    #[inline]
    pub const fn squared(self) -> Unit<Powered<D, P2>, Scale>
    where
        D: DimPow<P2>,
    {
        Unit::scaled(self.ratio.factor * self.ratio.factor)
    }

    /// The unit cubed.
    #[inline]
    pub const fn cubed(self) -> Unit<Powered<D, P3>, Scale>
    where
        D: DimPow<P3>,
    {
        let f = self.ratio.factor;
        Unit::scaled(f * f * f)
    }

    /// The reciprocal unit.
    ///
    /// ```rust
    /// use dimsafe_core::units::time::MINUTE;
    ///
    /// let per_minute = MINUTE.inverse();
    /// assert!((per_minute.of(60.0_f64).value() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn inverse(self) -> Unit<Powered<D, N1>, Scale>
    where
        D: DimPow<N1>,
    {
        Unit::scaled(1.0 / self.ratio.factor)
    }
}

impl<D> Unit<D, Affine> {
    /// A unit with `base = (raw + offset) * factor`.
    #[inline]
    pub const fn affine(offset: f64, factor: f64) -> Self {
        Self {
            ratio: Affine { offset, factor },
            dim: PhantomData,
        }
    }

    /// Size of one unit step in base SI units.
    #[inline]
    pub const fn factor(self) -> f64 {
        self.ratio.factor
    }

    /// Raw-number offset applied before scaling.
    #[inline]
    pub const fn offset(self) -> f64 {
        self.ratio.offset
    }
}

impl<D: Dimension> Unit<D, Scale> {
    /// Table row for this unit under `symbol`.
    #[inline]
    pub const fn describe(self, symbol: &'static str) -> UnitRow {
        UnitRow {
            symbol,
            exponents: D::EXPONENTS,
            ratio: RatioKind::Scale {
                factor: self.ratio.factor,
            },
        }
    }
}

impl<D: Dimension> Unit<D, Affine> {
    /// Table row for this unit under `symbol`.
    #[inline]
    pub const fn describe(self, symbol: &'static str) -> UnitRow {
        UnitRow {
            symbol,
            exponents: D::EXPONENTS,
            ratio: RatioKind::Affine {
                offset: self.ratio.offset,
                factor: self.ratio.factor,
            },
        }
    }
}

impl<D, R: Ratio> Unit<D, R> {
    /// The conversion carried by this unit.
    #[inline]
    pub fn ratio(self) -> R {
        self.ratio
    }

    /// A quantity of `raw` of this unit.
    ///
    /// ```rust
    /// use dimsafe_core::units::temperature::CELSIUS;
    ///
    /// assert!((CELSIUS.of(25.0_f64).value() - 298.15).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn of<S: Real>(self, raw: S) -> Quantity<D, S> {
        Quantity::from_base(self.ratio.to_base(raw))
    }

    /// A 2-vector quantity; every component is in this unit.
    #[inline]
    pub fn of_xy<S: Real>(self, x: S, y: S) -> Quantity<D, Vector2<S>> {
        self.of_payload(Vector2::new(x, y))
    }

    /// A 3-vector quantity; every component is in this unit.
    #[inline]
    pub fn of_xyz<S: Real>(self, x: S, y: S, z: S) -> Quantity<D, Vector3<S>> {
        self.of_payload(Vector3::new(x, y, z))
    }

    /// A quantity from any payload expressed in this unit.
    #[inline]
    pub fn of_payload<V: Payload>(self, raw: V) -> Quantity<D, V> {
        Quantity::from_base(raw.map(|c| self.ratio.to_base(c)))
    }

    /// The raw number(s) of `quantity` expressed in this unit.
    #[inline]
    pub fn value_of<V: Payload>(self, quantity: Quantity<D, V>) -> V {
        quantity.value().map(|c| self.ratio.to_raw(c))
    }
}

impl<D, V: Payload> Quantity<D, V> {
    /// The raw number(s) of this quantity expressed in `unit`.
    ///
    /// ```rust
    /// use dimsafe_core::units::length::{FOOT, METER};
    ///
    /// assert!((METER.of(0.3048_f64).value_in(FOOT) - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn value_in<R: Ratio>(self, unit: Unit<D, R>) -> V {
        unit.value_of(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Composition of scale units
// ─────────────────────────────────────────────────────────────────────────────

impl<D1: Mul<D2>, D2> Mul<Unit<D2, Scale>> for Unit<D1, Scale> {
    type Output = Unit<Prod<D1, D2>, Scale>;
    #[inline]
    fn mul(self, rhs: Unit<D2, Scale>) -> Self::Output {
        self.times(rhs)
    }
}

impl<D1: Div<D2>, D2> Div<Unit<D2, Scale>> for Unit<D1, Scale> {
    type Output = Unit<Quot<D1, D2>, Scale>;
    #[inline]
    fn div(self, rhs: Unit<D2, Scale>) -> Self::Output {
        self.per(rhs)
    }
}
