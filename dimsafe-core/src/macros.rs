//! Macros for declaring units.

/// Declares a group of units.
///
/// Each entry names the literal symbol, the constant and its [`Unit`](crate::unit::Unit) type,
/// and gives the value as a `const` expression:
///
/// ```rust
/// mod race {
///     use dimsafe_core::dimension::Length;
///     use dimsafe_core::units::length::METER;
///
///     dimsafe_core::units! {
///         /// 201.168 m.
///         furlong => FURLONG: Unit<Length> = METER.scaled_by(201.168);
///         /// Eight furlongs.
///         lmi => LAND_MILE: Unit<Length> = FURLONG.scaled_by(8.0);
///     }
/// }
///
/// assert_eq!(race::literals::furlong(2.0).value(), 402.336);
/// assert_eq!(race::TABLE[1].symbol, "lmi");
/// ```
///
/// For every entry the macro generates:
///
/// * the `pub const` unit itself;
/// * `literals::<symbol>(f64)`, which `qty!(2_furlong)` calls;
/// * a row of `TABLE`, which feeds the text parser.
#[macro_export]
macro_rules! units {
    ($(
        $(#[$meta:meta])*
        $sym:ident => $name:ident : Unit<$dim:ty $(, $ratio:ty)?> = $value:expr;
    )*) => {
        $(
            $(#[$meta])*
            pub const $name: $crate::unit::Unit<$dim $(, $ratio)?> = $value;
        )*

        /// Literal constructors, one per unit symbol.
        #[allow(non_snake_case)]
        pub mod literals {
            #[allow(unused_imports)]
            use super::*;

            $(
                #[doc = concat!("`value` [`", stringify!($name), "`](super::", stringify!($name), ").")]
                #[inline]
                pub fn $sym(value: f64) -> $crate::Quantity<$dim> {
                    super::$name.of(value)
                }
            )*
        }

        /// Parser rows for the units of this module.
        pub const TABLE: &[$crate::registry::UnitRow] = &[
            $($name.describe(stringify!($sym)),)*
        ];
    };
}
