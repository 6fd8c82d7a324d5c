//! Quantity type and its implementations.

use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use core::str::FromStr;

use num_traits::Float;
use typenum::{Integer, NonZero, Prod, Quot, P2, P3};

use crate::dimension::{Collapse, Collapsed, DimPow, DimRoot, Dimension, Dimensionless, Powered, Rooted};
use crate::error::ParseQuantityError;
use crate::payload::{Payload, Real, Vector2, Vector3};
use crate::registry::UnitRegistry;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A physical quantity of dimension `D` with payload `V`.
///
/// The payload is always stored in the SI base unit of `D` (metre, kilogram, second, kelvin,
/// radian), whatever unit was used to create it. Arithmetic is checked by the compiler: `+` and
/// `-` need identical dimensions, `*` and `/` compose them.
///
/// ```rust
/// use dimsafe_core::units::length::{KILOMETER, METER};
/// use dimsafe_core::units::time::HOUR;
///
/// let d = KILOMETER.of(3.0) + METER.of(500.0);
/// assert_eq!(d.value(), 3500.0);
///
/// let v = d / HOUR.of(0.5);
/// assert_eq!(v.value(), 3500.0 / 1800.0);
/// ```
///
/// Mixing dimensions in a sum does not compile:
///
/// ```rust,compile_fail
/// use dimsafe_core::units::length::METER;
/// use dimsafe_core::units::time::SECOND;
///
/// let _ = METER.of(1.0) + SECOND.of(1.0);
/// ```
#[repr(transparent)]
pub struct Quantity<D, V = f64> {
    value: V,
    dim: PhantomData<D>,
}

/// The dimension-agnostic zero.
///
/// `ZERO` can be added to, subtracted from and compared with a quantity of any dimension.
///
/// ```rust
/// use dimsafe_core::{Quantity, ZERO};
/// use dimsafe_core::dimension::Force;
///
/// let f: Quantity<Force> = ZERO.into();
/// assert!(f == ZERO);
/// assert_eq!((f + ZERO).value(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Zero;

/// The [`Zero`] sentinel.
pub const ZERO: Zero = Zero;

impl<D, V> Quantity<D, V> {
    /// Wraps a payload that is already expressed in base SI units.
    ///
    /// ```rust
    /// use dimsafe_core::Quantity;
    /// use dimsafe_core::dimension::Length;
    ///
    /// const MARATHON: Quantity<Length> = Quantity::from_base(42_195.0);
    /// assert_eq!(MARATHON.value(), 42_195.0);
    /// ```
    #[inline]
    pub const fn from_base(value: V) -> Self {
        Self {
            value,
            dim: PhantomData,
        }
    }

    /// Returns the payload in base SI units.
    #[inline]
    pub fn value(self) -> V {
        self.value
    }

    /// Borrows the payload in base SI units.
    #[inline]
    pub const fn value_ref(&self) -> &V {
        &self.value
    }

    /// Converts the element type through a lossless `From` conversion.
    ///
    /// ```rust
    /// use dimsafe_core::Quantity;
    /// use dimsafe_core::dimension::Mass;
    ///
    /// let m: Quantity<Mass, f32> = Quantity::from_base(1.5);
    /// let wide: Quantity<Mass, f64> = m.convert();
    /// assert_eq!(wide.value(), 1.5);
    /// ```
    #[inline]
    pub fn convert<W: From<V>>(self) -> Quantity<D, W> {
        Quantity::from_base(W::from(self.value))
    }
}

impl<D, V: Payload> Quantity<D, V> {
    /// A zero quantity.
    #[inline]
    pub fn zero() -> Self {
        Self::from_base(V::default())
    }

    /// Every component set to positive infinity.
    #[inline]
    pub fn infinity() -> Self {
        Self::from_base(V::splat(<V::Scalar as Float>::infinity()))
    }

    /// Every component set to NaN.
    ///
    /// ```rust
    /// use dimsafe_core::Quantity;
    /// use dimsafe_core::dimension::Time;
    ///
    /// assert!(Quantity::<Time>::nan().is_nan());
    /// ```
    #[inline]
    pub fn nan() -> Self {
        Self::from_base(V::splat(<V::Scalar as Float>::nan()))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_base(self.value.map(Float::abs))
    }

    /// Component-wise sign (`1`, `-1` or NaN), as a dimensionless payload.
    #[inline]
    pub fn signum(self) -> V {
        self.value.map(Float::signum)
    }

    /// Whether any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value.any(Float::is_nan)
    }

    /// Whether any component is infinite.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.value.any(Float::is_infinite)
    }

    /// Whether every component is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        !self.value.any(|c| !c.is_finite())
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_base(self.value.zip_map(other.value, Float::min))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_base(self.value.zip_map(other.value, Float::max))
    }

    /// Restricts every component to `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    ///
    /// ```rust
    /// use dimsafe_core::units::temperature::KELVIN;
    ///
    /// let mid = KELVIN.of(280.0).lerp(KELVIN.of(300.0), 0.25);
    /// assert_eq!(mid.value(), 285.0);
    /// ```
    #[inline]
    pub fn lerp(self, other: Self, t: V::Scalar) -> Self {
        Self::from_base(self.value.zip_map(other.value, |a, b| a + (b - a) * t))
    }

    /// Narrowing or widening conversion of the element type, `None` if a component does not fit.
    #[inline]
    pub fn cast<W: Real>(self) -> Option<Quantity<D, V::WithScalar<W>>> {
        self.value.cast::<W>().map(Quantity::from_base)
    }

    /// Raises the quantity to the integer power `N`; the dimension follows.
    ///
    /// ```rust
    /// use dimsafe_core::typenum::P3;
    /// use dimsafe_core::units::length::{CUBIC_METER, METER};
    ///
    /// assert_eq!(METER.of(2.0).pow::<P3>(), CUBIC_METER.of(8.0));
    /// ```
    #[inline]
    pub fn pow<N>(self) -> Collapsed<Powered<D, N>, V>
    where
        N: Integer,
        D: DimPow<N>,
        Powered<D, N>: Collapse<V>,
    {
        <Powered<D, N> as Collapse<V>>::collapse(self.value.map(|c| c.powi(N::I32)))
    }

    /// Takes the `N`-th root; only compiles when `N` divides every exponent of `D`.
    ///
    /// Odd roots of negative components keep their sign.
    ///
    /// ```rust,compile_fail
    /// use dimsafe_core::typenum::P2;
    /// use dimsafe_core::units::length::METER;
    ///
    /// let _ = METER.of(4.0).root::<P2>();
    /// ```
    #[inline]
    pub fn root<N>(self) -> Collapsed<Rooted<D, N>, V>
    where
        N: Integer + NonZero,
        D: DimRoot<N>,
        Rooted<D, N>: Collapse<V>,
    {
        <Rooted<D, N> as Collapse<V>>::collapse(self.value.map(|c| nth_root(c, N::I32)))
    }

    /// Square root, halving every exponent.
    ///
    /// ```rust
    /// use dimsafe_core::units::length::{METER, SQUARE_METER};
    ///
    /// assert_eq!(SQUARE_METER.of(9.0).sqrt(), METER.of(3.0));
    /// ```
    #[inline]
    pub fn sqrt(self) -> Collapsed<Rooted<D, P2>, V>
    where
        D: DimRoot<P2>,
        Rooted<D, P2>: Collapse<V>,
    {
        self.root::<P2>()
    }

    /// Cube root, dividing every exponent by three.
    #[inline]
    pub fn cbrt(self) -> Collapsed<Rooted<D, P3>, V>
    where
        D: DimRoot<P3>,
        Rooted<D, P3>: Collapse<V>,
    {
        self.root::<P3>()
    }
}

fn nth_root<S: Real>(c: S, n: i32) -> S {
    match n {
        1 => c,
        2 => c.sqrt(),
        3 => c.cbrt(),
        _ if n % 2 != 0 && c < S::zero() => -(-c).powf(S::one() / S::from_f64(n as f64)),
        _ => c.powf(S::one() / S::from_f64(n as f64)),
    }
}

impl<D: Dimension, S: Real> Quantity<D, S> {
    /// Replaces `self` with the quantity parsed from `text`, leaving it untouched on failure.
    ///
    /// ```rust
    /// use dimsafe_core::Quantity;
    /// use dimsafe_core::dimension::Velocity;
    ///
    /// let mut v: Quantity<Velocity> = Quantity::zero();
    /// assert!(v.parse_into("5 kg").is_err());
    /// assert_eq!(v.value(), 0.0);
    /// v.parse_into("36 km/h").unwrap();
    /// assert!((v.value() - 10.0).abs() < 1e-12);
    /// ```
    pub fn parse_into(&mut self, text: &str) -> Result<(), ParseQuantityError> {
        *self = text.parse()?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Core trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D, V: Clone> Clone for Quantity<D, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_base(self.value.clone())
    }
}

impl<D, V: Copy> Copy for Quantity<D, V> {}

impl<D, V: Default> Default for Quantity<D, V> {
    #[inline]
    fn default() -> Self {
        Self::from_base(V::default())
    }
}

impl<D: Dimension, V: fmt::Debug> fmt::Debug for Quantity<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({:?} {})", self.value, D::EXPONENTS)
    }
}

impl<D, V: fmt::Display> fmt::Display for Quantity<D, V> {
    /// Prints the base-unit payload; width and precision are forwarded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Text input is scalar-only: vector quantities print through `Display` as `(x, y, z)` but have
/// no `FromStr`. Parse the axes separately and join them with `Quantity::from_axes`.
impl<D: Dimension, S: Real> FromStr for Quantity<D, S> {
    type Err = ParseQuantityError;

    /// Parses `"<number> <unit signature>"` against the built-in unit table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitRegistry::global().parse_quantity(s)
    }
}

impl<D, V: PartialEq> PartialEq for Quantity<D, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D, V: PartialOrd> PartialOrd for Quantity<D, V> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D, V: Payload> PartialEq<Zero> for Quantity<D, V> {
    #[inline]
    fn eq(&self, _: &Zero) -> bool {
        self.value == V::default()
    }
}

impl<D, V: Payload> PartialEq<Quantity<D, V>> for Zero {
    #[inline]
    fn eq(&self, other: &Quantity<D, V>) -> bool {
        other == self
    }
}

impl<D, V: Payload + PartialOrd> PartialOrd<Zero> for Quantity<D, V> {
    #[inline]
    fn partial_cmp(&self, _: &Zero) -> Option<Ordering> {
        self.value.partial_cmp(&V::default())
    }
}

impl<D, V: Payload + PartialOrd> PartialOrd<Quantity<D, V>> for Zero {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<D, V>) -> Option<Ordering> {
        V::default().partial_cmp(&other.value)
    }
}

impl<D, V: Default> From<Zero> for Quantity<D, V> {
    #[inline]
    fn from(_: Zero) -> Self {
        Self::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Additive operators (same dimension or `Zero`)
// ─────────────────────────────────────────────────────────────────────────────

impl<D, V: Add<Output = V>> Add for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_base(self.value + rhs.value)
    }
}

impl<D, V: Sub<Output = V>> Sub for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_base(self.value - rhs.value)
    }
}

impl<D, V: Neg<Output = V>> Neg for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_base(-self.value)
    }
}

impl<D, V: AddAssign> AddAssign for Quantity<D, V> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<D, V: SubAssign> SubAssign for Quantity<D, V> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<D, V> Add<Zero> for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn add(self, _: Zero) -> Self {
        self
    }
}

impl<D, V> Sub<Zero> for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn sub(self, _: Zero) -> Self {
        self
    }
}

impl<D, V> Add<Quantity<D, V>> for Zero {
    type Output = Quantity<D, V>;
    #[inline]
    fn add(self, rhs: Quantity<D, V>) -> Quantity<D, V> {
        rhs
    }
}

impl<D, V: Neg<Output = V>> Sub<Quantity<D, V>> for Zero {
    type Output = Quantity<D, V>;
    #[inline]
    fn sub(self, rhs: Quantity<D, V>) -> Quantity<D, V> {
        -rhs
    }
}

impl<D, V> AddAssign<Zero> for Quantity<D, V> {
    #[inline]
    fn add_assign(&mut self, _: Zero) {}
}

impl<D, V> SubAssign<Zero> for Quantity<D, V> {
    #[inline]
    fn sub_assign(&mut self, _: Zero) {}
}

impl<D, V: Payload + Add<Output = V>> Sum for Quantity<D, V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

impl<'a, D, V: Payload + Add<Output = V>> Sum<&'a Quantity<D, V>> for Quantity<D, V> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + *q)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplicative operators (dimensions compose)
// ─────────────────────────────────────────────────────────────────────────────

impl<Dl, Dr, Vl, Vr> Mul<Quantity<Dr, Vr>> for Quantity<Dl, Vl>
where
    Dl: Mul<Dr>,
    Vl: Mul<Vr>,
    Prod<Dl, Dr>: Collapse<<Vl as Mul<Vr>>::Output>,
{
    type Output = Collapsed<Prod<Dl, Dr>, <Vl as Mul<Vr>>::Output>;

    #[inline]
    fn mul(self, rhs: Quantity<Dr, Vr>) -> Self::Output {
        <Prod<Dl, Dr> as Collapse<_>>::collapse(self.value * rhs.value)
    }
}

impl<Dl, Dr, Vl, Vr> Div<Quantity<Dr, Vr>> for Quantity<Dl, Vl>
where
    Dl: Div<Dr>,
    Vl: Div<Vr>,
    Quot<Dl, Dr>: Collapse<<Vl as Div<Vr>>::Output>,
{
    type Output = Collapsed<Quot<Dl, Dr>, <Vl as Div<Vr>>::Output>;

    #[inline]
    fn div(self, rhs: Quantity<Dr, Vr>) -> Self::Output {
        <Quot<Dl, Dr> as Collapse<_>>::collapse(self.value / rhs.value)
    }
}

/// In-place scaling by a dimensionless quantity; the dimension of the receiver cannot change.
///
/// ```rust
/// use dimsafe_core::dimension::Dimensionless;
/// use dimsafe_core::units::length::METER;
/// use dimsafe_core::Quantity;
///
/// let mut d = METER.of(1.5);
/// d *= Quantity::<Dimensionless>::from(2.0_f64);
/// d *= 2.0_f64;
/// assert_eq!(d, METER.of(6.0));
/// ```
///
/// ```rust,compile_fail
/// use dimsafe_core::units::length::METER;
/// use dimsafe_core::units::time::SECOND;
///
/// let mut d = METER.of(1.0);
/// d *= SECOND.of(2.0);
/// ```
impl<D, V: MulAssign<W>, W> MulAssign<Quantity<Dimensionless, W>> for Quantity<D, V> {
    #[inline]
    fn mul_assign(&mut self, rhs: Quantity<Dimensionless, W>) {
        self.value *= rhs.value;
    }
}

/// In-place division by a dimensionless quantity.
///
/// ```rust,compile_fail
/// use dimsafe_core::units::length::METER;
/// use dimsafe_core::units::time::SECOND;
///
/// let mut d = METER.of(1.0);
/// d /= SECOND.of(2.0);
/// ```
impl<D, V: DivAssign<W>, W> DivAssign<Quantity<Dimensionless, W>> for Quantity<D, V> {
    #[inline]
    fn div_assign(&mut self, rhs: Quantity<Dimensionless, W>) {
        self.value /= rhs.value;
    }
}

macro_rules! scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<D, V: Mul<$t, Output = V>> Mul<$t> for Quantity<D, V> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Self::from_base(self.value * rhs)
                }
            }

            impl<D> Mul<Quantity<D, $t>> for $t {
                type Output = Quantity<D, $t>;
                #[inline]
                fn mul(self, rhs: Quantity<D, $t>) -> Quantity<D, $t> {
                    Quantity::from_base(self * rhs.value)
                }
            }

            impl<D> Mul<Quantity<D, Vector2<$t>>> for $t {
                type Output = Quantity<D, Vector2<$t>>;
                #[inline]
                fn mul(self, rhs: Quantity<D, Vector2<$t>>) -> Quantity<D, Vector2<$t>> {
                    Quantity::from_base(self * rhs.value)
                }
            }

            impl<D> Mul<Quantity<D, Vector3<$t>>> for $t {
                type Output = Quantity<D, Vector3<$t>>;
                #[inline]
                fn mul(self, rhs: Quantity<D, Vector3<$t>>) -> Quantity<D, Vector3<$t>> {
                    Quantity::from_base(self * rhs.value)
                }
            }

            impl<D, V: Div<$t, Output = V>> Div<$t> for Quantity<D, V> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Self::from_base(self.value / rhs)
                }
            }

            // Scalar payloads only: a scalar divided by a vector has no meaning.
            impl<D> Div<Quantity<D, $t>> for $t
            where
                Dimensionless: Div<D>,
                Quot<Dimensionless, D>: Collapse<$t>,
            {
                type Output = Collapsed<Quot<Dimensionless, D>, $t>;
                #[inline]
                fn div(self, rhs: Quantity<D, $t>) -> Self::Output {
                    <Quot<Dimensionless, D> as Collapse<$t>>::collapse(self / rhs.value)
                }
            }

            impl<D, V: MulAssign<$t>> MulAssign<$t> for Quantity<D, V> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    self.value *= rhs;
                }
            }

            impl<D, V: DivAssign<$t>> DivAssign<$t> for Quantity<D, V> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    self.value /= rhs;
                }
            }

            impl From<$t> for Quantity<Dimensionless, $t> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_base(value)
                }
            }

            impl From<Quantity<Dimensionless, $t>> for $t {
                #[inline]
                fn from(q: Quantity<Dimensionless, $t>) -> $t {
                    q.value
                }
            }
        )*
    };
}

scalar_ops!(f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Widening element conversions
// ─────────────────────────────────────────────────────────────────────────────

impl<D> From<Quantity<D, f32>> for Quantity<D, f64> {
    #[inline]
    fn from(q: Quantity<D, f32>) -> Self {
        q.convert()
    }
}

impl<D> From<Quantity<D, Vector2<f32>>> for Quantity<D, Vector2<f64>> {
    #[inline]
    fn from(q: Quantity<D, Vector2<f32>>) -> Self {
        q.convert()
    }
}

impl<D> From<Quantity<D, Vector3<f32>>> for Quantity<D, Vector3<f64>> {
    #[inline]
    fn from(q: Quantity<D, Vector3<f32>>) -> Self {
        q.convert()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D, V: Serialize> Serialize for Quantity<D, V> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D, V: Deserialize<'de>> Deserialize<'de> for Quantity<D, V> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        V::deserialize(deserializer).map(Quantity::from_base)
    }
}

/// Serde helper module for serializing quantities together with their dimension.
///
/// Use it with `#[serde(with = "...")]` to keep the exponent vector next to the value, so
/// that reading a file written for another dimension fails instead of silently reinterpreting it.
///
/// ```rust
/// use dimsafe_core::Quantity;
/// use dimsafe_core::dimension::Length;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Track {
///     #[serde(with = "dimsafe_core::serde_with_dimension")]
///     length: Quantity<Length>, // {"value": 400.0, "dimension": [1, 0, 0, 0, 0]}
///
///     width: Quantity<Length>, // 1.22
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_dimension {
    use super::*;
    use crate::dimension::Exponents;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a quantity as `{ "value": …, "dimension": [l, m, t, th, a] }`.
    pub fn serialize<D, V, S>(quantity: &Quantity<D, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        V: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", quantity.value_ref())?;
        state.serialize_field("dimension", &D::EXPONENTS)?;
        state.end()
    }

    /// Deserializes a quantity, rejecting a `dimension` field that differs from `D`.
    ///
    /// A missing `dimension` field is accepted.
    pub fn deserialize<'de, D, V, De>(deserializer: De) -> Result<Quantity<D, V>, De::Error>
    where
        D: Dimension,
        V: Deserialize<'de>,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Dimension,
        }

        struct QuantityVisitor<D, V>(PhantomData<(D, V)>);

        impl<'de, D: Dimension, V: Deserialize<'de>> Visitor<'de> for QuantityVisitor<D, V> {
            type Value = Quantity<D, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and dimension fields")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Quantity<D, V>, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut value: Option<V> = None;
                let mut dimension: Option<Exponents> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Dimension => {
                            if dimension.is_some() {
                                return Err(de::Error::duplicate_field("dimension"));
                            }
                            dimension = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = dimension {
                    if found != D::EXPONENTS {
                        return Err(de::Error::custom(format!(
                            "dimension mismatch: expected {}, found {}",
                            D::EXPONENTS,
                            found
                        )));
                    }
                }

                Ok(Quantity::from_base(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "dimension"],
            QuantityVisitor(PhantomData),
        )
    }
}
