//! Dimension types and traits.
//!
//! A dimension is a vector of five integer exponents over the base quantities
//! length, mass, time, temperature and angle. The exponents live in the type system as
//! [`typenum`] integers, so `Dim<P1, Z0, N1, Z0, Z0>` *is* "length per time" and two dimensions
//! are equal exactly when their types are equal.
//!
//! Composition is ordinary operator arithmetic on the marker types:
//!
//! ```rust
//! use dimsafe_core::dimension::{Length, Time, Velocity};
//! use dimsafe_core::typenum::Quot;
//!
//! fn same<A: 'static, B: 'static>() -> bool {
//!     core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
//! }
//! assert!(same::<Quot<Length, Time>, Velocity>());
//! ```

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Sub};

use typenum::{Bit, Diff, Integer, NInt, NonZero, PInt, PartialDiv, PartialQuot, Prod, Sum, Unsigned};
use typenum::{B0, B1, N1, N2, N3, P1, P2, P3, Z0};

use crate::quantity::Quantity;

/// Marker trait for **dimensions**.
///
/// Implemented by every [`Dim`] whose parameters are typenum integers. The exponents are also
/// available at run time through [`Dimension::EXPONENTS`], which the text parser and the serde
/// helpers use to validate input against the static type.
pub trait Dimension:
    Copy + Default + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Run-time copy of the exponent vector.
    const EXPONENTS: Exponents;
}

/// Type-level exponent: a typenum integer that knows whether it is zero.
pub trait Exponent: Integer + Copy + Default + fmt::Debug + Eq + Hash + Send + Sync + 'static {
    /// `B1` for `Z0`, `B0` otherwise.
    type IsZero: Bit;
}

impl Exponent for Z0 {
    type IsZero = B1;
}

impl<U> Exponent for PInt<U>
where
    U: Unsigned + NonZero + Copy + Default + fmt::Debug + Eq + Hash + Send + Sync + 'static,
{
    type IsZero = B0;
}

impl<U> Exponent for NInt<U>
where
    U: Unsigned + NonZero + Copy + Default + fmt::Debug + Eq + Hash + Send + Sync + 'static,
{
    type IsZero = B0;
}

/// Dimension with exponents for length `L`, mass `M`, time `T`, temperature `Th` and angle `A`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim<L, M, T, Th, A>(PhantomData<(L, M, T, Th, A)>);

impl<L, M, T, Th, A> Dimension for Dim<L, M, T, Th, A>
where
    L: Exponent,
    M: Exponent,
    T: Exponent,
    Th: Exponent,
    A: Exponent,
{
    const EXPONENTS: Exponents = Exponents([L::I32, M::I32, T::I32, Th::I32, A::I32]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Composition
// ─────────────────────────────────────────────────────────────────────────────

impl<L1, M1, T1, Th1, A1, L2, M2, T2, Th2, A2> Mul<Dim<L2, M2, T2, Th2, A2>>
    for Dim<L1, M1, T1, Th1, A1>
where
    L1: Add<L2>,
    M1: Add<M2>,
    T1: Add<T2>,
    Th1: Add<Th2>,
    A1: Add<A2>,
{
    type Output = Dim<Sum<L1, L2>, Sum<M1, M2>, Sum<T1, T2>, Sum<Th1, Th2>, Sum<A1, A2>>;

    #[inline]
    fn mul(self, _: Dim<L2, M2, T2, Th2, A2>) -> Self::Output {
        Dim(PhantomData)
    }
}

impl<L1, M1, T1, Th1, A1, L2, M2, T2, Th2, A2> Div<Dim<L2, M2, T2, Th2, A2>>
    for Dim<L1, M1, T1, Th1, A1>
where
    L1: Sub<L2>,
    M1: Sub<M2>,
    T1: Sub<T2>,
    Th1: Sub<Th2>,
    A1: Sub<A2>,
{
    type Output = Dim<Diff<L1, L2>, Diff<M1, M2>, Diff<T1, T2>, Diff<Th1, Th2>, Diff<A1, A2>>;

    #[inline]
    fn div(self, _: Dim<L2, M2, T2, Th2, A2>) -> Self::Output {
        Dim(PhantomData)
    }
}

/// Raising a dimension to the integer power `N`.
pub trait DimPow<N> {
    /// Every exponent multiplied by `N`.
    type Output: Dimension;
}

impl<L, M, T, Th, A, N> DimPow<N> for Dim<L, M, T, Th, A>
where
    L: Mul<N>,
    M: Mul<N>,
    T: Mul<N>,
    Th: Mul<N>,
    A: Mul<N>,
    Dim<Prod<L, N>, Prod<M, N>, Prod<T, N>, Prod<Th, N>, Prod<A, N>>: Dimension,
{
    type Output = Dim<Prod<L, N>, Prod<M, N>, Prod<T, N>, Prod<Th, N>, Prod<A, N>>;
}

/// Taking the `N`-th root of a dimension.
///
/// Only implemented when `N` divides every exponent, so `root::<P2>()` of a volume does not
/// compile.
pub trait DimRoot<N> {
    /// Every exponent divided by `N`.
    type Output: Dimension;
}

impl<L, M, T, Th, A, N> DimRoot<N> for Dim<L, M, T, Th, A>
where
    L: PartialDiv<N>,
    M: PartialDiv<N>,
    T: PartialDiv<N>,
    Th: PartialDiv<N>,
    A: PartialDiv<N>,
    Dim<
        PartialQuot<L, N>,
        PartialQuot<M, N>,
        PartialQuot<T, N>,
        PartialQuot<Th, N>,
        PartialQuot<A, N>,
    >: Dimension,
{
    type Output = Dim<
        PartialQuot<L, N>,
        PartialQuot<M, N>,
        PartialQuot<T, N>,
        PartialQuot<Th, N>,
        PartialQuot<A, N>,
    >;
}

/// `D` raised to `N`.
pub type Powered<D, N> = <D as DimPow<N>>::Output;
/// `N`-th root of `D`.
pub type Rooted<D, N> = <D as DimRoot<N>>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Decay of dimensionless results
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a computed payload in the right result type for dimension `Self`.
///
/// Dimensionless results decay to the bare payload `V`; every other dimension yields
/// `Quantity<Self, V>`.
pub trait Collapse<V> {
    /// `V` or `Quantity<Self, V>`.
    type Output;

    /// Wraps a base-unit payload.
    fn collapse(value: V) -> Self::Output;
}

/// Result type of a dimension-producing operation on payload `V`.
pub type Collapsed<D, V> = <D as Collapse<V>>::Output;

/// Picks the result type from the per-exponent zero flags.
pub trait Select<D, V> {
    /// Selected result type.
    type Output;

    /// Wraps the payload.
    fn select(value: V) -> Self::Output;
}

impl<D, V> Select<D, V> for (B1, B1, B1, B1, B1) {
    type Output = V;

    #[inline]
    fn select(value: V) -> V {
        value
    }
}

macro_rules! select_quantity {
    ($(<$($free:ident),*> ($($flag:ident),*);)*) => {
        $(
            impl<D: Dimension, V, $($free),*> Select<D, V> for ($($flag),*) {
                type Output = Quantity<D, V>;

                #[inline]
                fn select(value: V) -> Quantity<D, V> {
                    Quantity::from_base(value)
                }
            }
        )*
    };
}

// The first flag that is B0 decides; the slots after it are free.
select_quantity! {
    <X1, X2, X3, X4> (B0, X1, X2, X3, X4);
    <X2, X3, X4> (B1, B0, X2, X3, X4);
    <X3, X4> (B1, B1, B0, X3, X4);
    <X4> (B1, B1, B1, B0, X4);
    <> (B1, B1, B1, B1, B0);
}

impl<L, M, T, Th, A, V> Collapse<V> for Dim<L, M, T, Th, A>
where
    L: Exponent,
    M: Exponent,
    T: Exponent,
    Th: Exponent,
    A: Exponent,
    (L::IsZero, M::IsZero, T::IsZero, Th::IsZero, A::IsZero): Select<Self, V>,
{
    type Output = <(L::IsZero, M::IsZero, T::IsZero, Th::IsZero, A::IsZero) as Select<Self, V>>::Output;

    #[inline]
    fn collapse(value: V) -> Self::Output {
        <(L::IsZero, M::IsZero, T::IsZero, Th::IsZero, A::IsZero) as Select<Self, V>>::select(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Run-time exponent view
// ─────────────────────────────────────────────────────────────────────────────

/// Run-time exponent vector `[length, mass, time, temperature, angle]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Exponents(pub [i32; 5]);

impl Exponents {
    /// The dimensionless vector.
    pub const NONE: Exponents = Exponents([0; 5]);

    /// Whether every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        let e = self.0;
        e[0] == 0 && e[1] == 0 && e[2] == 0 && e[3] == 0 && e[4] == 0
    }

    /// Per-exponent sum (dimension of a product), `None` if an exponent overflows.
    pub fn product(self, other: Exponents) -> Option<Exponents> {
        let mut out = self.0;
        for (o, e) in out.iter_mut().zip(other.0) {
            *o = o.checked_add(e)?;
        }
        Some(Exponents(out))
    }

    /// Every exponent multiplied by `n` (dimension of a power), `None` on overflow.
    pub fn powi(self, n: i32) -> Option<Exponents> {
        let mut out = self.0;
        for e in &mut out {
            *e = e.checked_mul(n)?;
        }
        Some(Exponents(out))
    }
}

const SYMBOLS: [&str; 5] = ["L", "M", "T", "Θ", "A"];

fn superscript(n: i32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    if n < 0 {
        f.write_str("⁻")?;
    }
    for c in n.unsigned_abs().to_string().bytes() {
        write!(f, "{}", DIGITS[(c - b'0') as usize])?;
    }
    Ok(())
}

impl fmt::Display for Exponents {
    /// Formats as `L·T⁻¹`; the dimensionless vector prints as `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (symbol, &e) in SYMBOLS.iter().zip(self.0.iter()) {
            if e == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(symbol)?;
            if e != 1 {
                superscript(e, f)?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Named dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// No dimension: pure numbers, ratios, counts.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0>;
/// Length (metre).
pub type Length = Dim<P1, Z0, Z0, Z0, Z0>;
/// Mass (kilogram).
pub type Mass = Dim<Z0, P1, Z0, Z0, Z0>;
/// Time (second).
pub type Time = Dim<Z0, Z0, P1, Z0, Z0>;
/// Thermodynamic temperature (kelvin).
pub type Temperature = Dim<Z0, Z0, Z0, P1, Z0>;
/// Plane angle (radian).
pub type Angle = Dim<Z0, Z0, Z0, Z0, P1>;

/// Area, `L²`.
pub type Area = Dim<P2, Z0, Z0, Z0, Z0>;
/// Volume, `L³`.
pub type Volume = Dim<P3, Z0, Z0, Z0, Z0>;
/// Velocity, `L·T⁻¹`.
pub type Velocity = Dim<P1, Z0, N1, Z0, Z0>;
/// Acceleration, `L·T⁻²`.
pub type Acceleration = Dim<P1, Z0, N2, Z0, Z0>;
/// Frequency, `T⁻¹`.
pub type Frequency = Dim<Z0, Z0, N1, Z0, Z0>;
/// Angular velocity, `T⁻¹·A`.
pub type AngularVelocity = Dim<Z0, Z0, N1, Z0, P1>;
/// Momentum, `L·M·T⁻¹`.
pub type Momentum = Dim<P1, P1, N1, Z0, Z0>;
/// Force, `L·M·T⁻²`.
pub type Force = Dim<P1, P1, N2, Z0, Z0>;
/// Energy, `L²·M·T⁻²`.
pub type Energy = Dim<P2, P1, N2, Z0, Z0>;
/// Power, `L²·M·T⁻³`.
pub type Power = Dim<P2, P1, N3, Z0, Z0>;
/// Pressure, `L⁻¹·M·T⁻²`.
pub type Pressure = Dim<N1, P1, N2, Z0, Z0>;
/// Mass density, `L⁻³·M`.
pub type Density = Dim<N3, P1, Z0, Z0, Z0>;

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;
    use typenum::{Quot, P4};

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn base_exponents() {
        assert_eq!(Length::EXPONENTS, Exponents([1, 0, 0, 0, 0]));
        assert_eq!(Temperature::EXPONENTS, Exponents([0, 0, 0, 1, 0]));
        assert_eq!(Pressure::EXPONENTS, Exponents([-1, 1, -2, 0, 0]));
        assert!(Dimensionless::EXPONENTS.is_dimensionless());
    }

    #[test]
    fn product_and_quotient() {
        assert!(same::<Prod<Length, Length>, Area>());
        assert!(same::<Quot<Length, Time>, Velocity>());
        assert!(same::<Quot<Velocity, Time>, Acceleration>());
        assert!(same::<Prod<Mass, Acceleration>, Force>());
        assert!(same::<Prod<Force, Length>, Energy>());
        assert!(same::<Quot<Energy, Time>, Power>());
        assert!(same::<Quot<Length, Length>, Dimensionless>());
    }

    #[test]
    fn composition_is_associative_and_commutative() {
        assert!(same::<Prod<Prod<Length, Mass>, Time>, Prod<Length, Prod<Mass, Time>>>());
        assert!(same::<Prod<Length, Mass>, Prod<Mass, Length>>());
        assert!(same::<Quot<Quot<Energy, Mass>, Time>, Quot<Energy, Prod<Mass, Time>>>());
    }

    #[test]
    fn powers_and_roots() {
        assert!(same::<Powered<Length, P3>, Volume>());
        assert!(same::<Powered<Velocity, P2>, Quot<Energy, Mass>>());
        assert!(same::<Powered<Time, N1>, Frequency>());
        assert!(same::<Rooted<Area, P2>, Length>());
        assert!(same::<Rooted<Powered<Length, P4>, P2>, Area>());
        assert!(same::<Rooted<Dimensionless, P3>, Dimensionless>());
    }

    #[test]
    fn collapse_dimensionless_to_payload() {
        let plain: f64 = <Dimensionless as Collapse<f64>>::collapse(2.5);
        assert_eq!(plain, 2.5);

        let wrapped: Quantity<Length, f64> = <Length as Collapse<f64>>::collapse(2.5);
        assert_eq!(wrapped.value(), 2.5);

        let angle: Quantity<Angle, f64> = <Angle as Collapse<f64>>::collapse(1.0);
        assert_eq!(angle.value(), 1.0);
    }

    #[test]
    fn exponents_display() {
        assert_eq!(Velocity::EXPONENTS.to_string(), "L·T⁻¹");
        assert_eq!(Energy::EXPONENTS.to_string(), "L²·M·T⁻²");
        assert_eq!(Density::EXPONENTS.to_string(), "L⁻³·M");
        assert_eq!(AngularVelocity::EXPONENTS.to_string(), "T⁻¹·A");
        assert_eq!(Dimensionless::EXPONENTS.to_string(), "1");
        assert_eq!(Exponents([12, 0, 0, 0, 0]).to_string(), "L¹²");
    }

    #[test]
    fn exponents_arithmetic() {
        let v = Velocity::EXPONENTS;
        assert_eq!(v.product(Time::EXPONENTS), Some(Length::EXPONENTS));
        assert_eq!(Length::EXPONENTS.powi(2), Some(Area::EXPONENTS));
        assert_eq!(v.powi(0), Some(Exponents::NONE));

        let huge = Exponents([i32::MAX, 0, 0, 0, 0]);
        assert_eq!(huge.product(Length::EXPONENTS), None);
        assert_eq!(huge.powi(2), None);
        assert_eq!(Exponents([i32::MIN, 0, 0, 0, 0]).powi(-1), None);
    }
}
