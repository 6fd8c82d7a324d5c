//! Run-time unit table used by the text parser.
//!
//! Every unit declared with [`units!`](crate::units!) contributes a [`UnitRow`] to the built-in
//! table. A [`UnitRegistry`] starts from those rows and can be extended at run time, either
//! programmatically ([`UnitRegistry::insert`], [`UnitRegistry::define`]) or, with the `catalog`
//! feature, from a TOML file:
//!
//! ```toml
//! [[unit]]
//! symbol = "furlong"
//! definition = "201.168 m"
//!
//! [[unit]]
//! symbol = "smoot"
//! factor = 1.7018
//! dimension = [1, 0, 0, 0, 0]
//! ```
//!
//! The parser never consults anything but the registry it is called on; `str::parse` on a
//! [`Quantity`] uses [`UnitRegistry::global`], which holds the built-in table only.

use std::collections::HashMap;

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::dimension::{Dimension, Exponents};
use crate::error::{ParseQuantityError, ParseResult, RegistryError, RegistryResult};
use crate::parse::{parse_signature, split_number};
use crate::payload::Real;
use crate::quantity::Quantity;
use crate::unit::{Ratio, RatioKind};
use crate::units;

/// Static description of a built-in unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRow {
    /// Symbol accepted by the parser.
    pub symbol: &'static str,
    /// Dimension of the unit.
    pub exponents: Exponents,
    /// Conversion to base SI units.
    pub ratio: RatioKind,
}

/// Owned description of a registered unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDef {
    /// Symbol accepted by the parser.
    pub symbol: String,
    /// Dimension of the unit.
    pub exponents: Exponents,
    /// Conversion to base SI units.
    pub ratio: RatioKind,
}

impl From<&UnitRow> for UnitDef {
    fn from(row: &UnitRow) -> Self {
        UnitDef {
            symbol: row.symbol.to_string(),
            exponents: row.exponents,
            ratio: row.ratio,
        }
    }
}

/// Dimension and conversion of a resolved unit signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Dimension of the signature.
    pub exponents: Exponents,
    /// Conversion of raw numbers in the signature to base SI units.
    pub ratio: RatioKind,
}

impl Conversion {
    /// The empty signature: dimensionless, factor 1.
    pub const IDENTITY: Conversion = Conversion {
        exponents: Exponents::NONE,
        ratio: RatioKind::Scale { factor: 1.0 },
    };
}

/// Symbol table mapping unit symbols to their dimension and conversion.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: HashMap<String, UnitDef>,
}

static GLOBAL: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::builtin);

impl UnitRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in unit and alias.
    ///
    /// ```rust
    /// use dimsafe_core::registry::UnitRegistry;
    ///
    /// let registry = UnitRegistry::builtin();
    /// assert!(registry.lookup("km").is_some());
    /// assert!(registry.lookup("°C").is_some());
    /// ```
    pub fn builtin() -> Self {
        let mut table = HashMap::new();
        for row in units::TABLES.iter().flat_map(|rows| rows.iter()) {
            table.insert(row.symbol.to_string(), UnitDef::from(row));
        }
        for &(alias, target) in units::ALIASES {
            if let Some(def) = table.get(target).cloned() {
                table.insert(
                    alias.to_string(),
                    UnitDef {
                        symbol: alias.to_string(),
                        ..def
                    },
                );
            }
        }
        debug!("built-in unit registry holds {} symbols", table.len());
        Self { units: table }
    }

    /// The shared built-in registry used by `FromStr`.
    pub fn global() -> &'static UnitRegistry {
        &GLOBAL
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no symbol is registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Registered symbols, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    /// The unit registered under `symbol`.
    pub fn lookup(&self, symbol: &str) -> Option<&UnitDef> {
        self.units.get(symbol)
    }

    /// Adds a unit, rejecting taken symbols, malformed symbols and unusable conversions.
    pub fn insert(&mut self, def: UnitDef) -> RegistryResult<()> {
        validate(&def)?;
        if self.units.contains_key(&def.symbol) {
            return Err(RegistryError::DuplicateSymbol(def.symbol));
        }
        debug!(
            "registered unit {:?} ({}, {:?})",
            def.symbol, def.exponents, def.ratio
        );
        self.units.insert(def.symbol.clone(), def);
        Ok(())
    }

    /// Adds `symbol` defined as a multiple of already known units, e.g. `"201.168 m"`.
    ///
    /// ```rust
    /// use dimsafe_core::registry::UnitRegistry;
    /// use dimsafe_core::Quantity;
    /// use dimsafe_core::dimension::Length;
    ///
    /// let mut registry = UnitRegistry::builtin();
    /// registry.define("furlong", "201.168 m").unwrap();
    /// let q: Quantity<Length> = registry.parse_quantity("2 furlong").unwrap();
    /// assert!((q.value() - 402.336).abs() < 1e-9);
    /// ```
    pub fn define(&mut self, symbol: &str, definition: &str) -> RegistryResult<()> {
        let to_err = |source| RegistryError::Definition {
            symbol: symbol.to_string(),
            source,
        };
        let (number, signature) = split_number(definition).map_err(to_err)?;
        let conversion = if signature.is_empty() {
            Conversion::IDENTITY
        } else {
            self.resolve(signature).map_err(to_err)?
        };
        if conversion.ratio.is_affine() {
            return Err(RegistryError::invalid(
                symbol,
                "a definition cannot use an offset unit",
            ));
        }
        self.insert(UnitDef {
            symbol: symbol.to_string(),
            exponents: conversion.exponents,
            ratio: RatioKind::Scale {
                factor: number * conversion.ratio.factor(),
            },
        })
    }

    /// Resolves a unit signature such as `"km/h"` or `"kg·m²/s²"`.
    ///
    /// Offset units are only accepted as the whole signature.
    pub fn resolve(&self, signature: &str) -> ParseResult<Conversion> {
        let terms = parse_signature(signature, |s| self.units.contains_key(s))?;

        let mut exponents = Exponents::NONE;
        let mut factor = 1.0_f64;
        for term in &terms {
            let def = self
                .lookup(term.symbol)
                .ok_or_else(|| ParseQuantityError::UnknownUnit(term.symbol.to_string()))?;
            if def.ratio.is_affine() {
                if terms.len() == 1 && term.power == 1 {
                    trace!("resolved {signature:?} to offset unit {:?}", def.symbol);
                    return Ok(Conversion {
                        exponents: def.exponents,
                        ratio: def.ratio,
                    });
                }
                return Err(ParseQuantityError::AffineInCompound(term.symbol.to_string()));
            }
            exponents = def
                .exponents
                .powi(term.power)
                .and_then(|e| exponents.product(e))
                .ok_or_else(|| ParseQuantityError::malformed(signature, "exponent overflow"))?;
            factor *= def.ratio.factor().powi(term.power);
        }
        if !factor.is_finite() || factor == 0.0 {
            return Err(ParseQuantityError::malformed(signature, "factor out of range"));
        }

        trace!("resolved {signature:?} to {exponents} × {factor}");
        Ok(Conversion {
            exponents,
            ratio: RatioKind::Scale { factor },
        })
    }

    /// Parses `"<number> <signature>"` into a quantity of dimension `D`.
    ///
    /// A missing signature is accepted only when `D` is dimensionless.
    pub fn parse_quantity<D: Dimension, S: Real>(&self, text: &str) -> ParseResult<Quantity<D, S>> {
        let (number, signature) = split_number(text)?;
        let conversion = if signature.is_empty() {
            Conversion::IDENTITY
        } else {
            self.resolve(signature)?
        };
        if conversion.exponents != D::EXPONENTS {
            return Err(ParseQuantityError::DimensionMismatch {
                expected: D::EXPONENTS,
                found: conversion.exponents,
            });
        }
        Ok(Quantity::from_base(S::from_f64(
            conversion.ratio.to_base(number),
        )))
    }
}

fn validate(def: &UnitDef) -> RegistryResult<()> {
    let symbol = def.symbol.as_str();
    let Some(first) = symbol.chars().next() else {
        return Err(RegistryError::invalid(symbol, "symbol is empty"));
    };
    if first.is_ascii_digit() || matches!(first, '+' | '-' | '.') {
        return Err(RegistryError::invalid(
            symbol,
            "symbol cannot start like a number",
        ));
    }
    if symbol
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '*' | '·' | '/' | '^'))
    {
        return Err(RegistryError::invalid(
            symbol,
            "symbol cannot contain whitespace or operators",
        ));
    }
    let (factor, offset) = match def.ratio {
        RatioKind::Scale { factor } => (factor, 0.0),
        RatioKind::Affine { offset, factor } => (factor, offset),
    };
    if !factor.is_finite() || factor == 0.0 {
        return Err(RegistryError::invalid(
            symbol,
            "factor must be finite and non-zero",
        ));
    }
    if !offset.is_finite() {
        return Err(RegistryError::invalid(symbol, "offset must be finite"));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// TOML catalogs
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "catalog")]
mod catalog {
    use std::fs;
    use std::path::Path;

    use log::{debug, warn};
    use serde::Deserialize;

    use super::{UnitDef, UnitRegistry};
    use crate::dimension::Exponents;
    use crate::error::{RegistryError, RegistryResult};
    use crate::unit::RatioKind;

    /// Catalog file layout.
    #[derive(Debug, Deserialize)]
    struct Catalog {
        #[serde(default)]
        unit: Vec<CatalogEntry>,
    }

    /// One `[[unit]]` table.
    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct CatalogEntry {
        symbol: String,
        #[serde(default)]
        definition: Option<String>,
        #[serde(default)]
        factor: Option<f64>,
        #[serde(default)]
        offset: Option<f64>,
        #[serde(default)]
        dimension: Option<[i32; 5]>,
    }

    impl CatalogEntry {
        fn apply(self, registry: &mut UnitRegistry) -> RegistryResult<()> {
            match (self.definition, self.factor) {
                (Some(definition), None) => {
                    if self.offset.is_some() || self.dimension.is_some() {
                        return Err(RegistryError::invalid(
                            &self.symbol,
                            "`definition` excludes `offset` and `dimension`",
                        ));
                    }
                    registry.define(&self.symbol, &definition)
                }
                (None, Some(factor)) => {
                    let exponents = self.dimension.map(Exponents).unwrap_or(Exponents::NONE);
                    let ratio = match self.offset {
                        Some(offset) => RatioKind::Affine { offset, factor },
                        None => RatioKind::Scale { factor },
                    };
                    registry.insert(UnitDef {
                        symbol: self.symbol,
                        exponents,
                        ratio,
                    })
                }
                (Some(_), Some(_)) => Err(RegistryError::invalid(
                    &self.symbol,
                    "give either `definition` or `factor`, not both",
                )),
                (None, None) => Err(RegistryError::invalid(
                    &self.symbol,
                    "missing `definition` or `factor`",
                )),
            }
        }
    }

    impl UnitRegistry {
        /// The built-in units plus every entry of a TOML catalog.
        pub fn from_toml_str(text: &str) -> RegistryResult<Self> {
            let mut registry = Self::builtin();
            registry.load_toml_str(text)?;
            Ok(registry)
        }

        /// Adds every entry of a TOML catalog, in order; returns how many were added.
        ///
        /// Entries may refer to units defined earlier in the same catalog. On error the
        /// registry is left unchanged.
        pub fn load_toml_str(&mut self, text: &str) -> RegistryResult<usize> {
            let catalog: Catalog = toml::from_str(text)?;
            let mut staged = self.clone();
            let count = catalog.unit.len();
            for entry in catalog.unit {
                let symbol = entry.symbol.clone();
                entry.apply(&mut staged).inspect_err(|e| {
                    warn!("rejected catalog unit {symbol:?}: {e}");
                })?;
            }
            *self = staged;
            debug!("loaded {count} units from catalog");
            Ok(count)
        }

        /// The built-in units plus every entry of the TOML catalog at `path`.
        pub fn from_file<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
            let mut registry = Self::builtin();
            registry.load_file(path)?;
            Ok(registry)
        }

        /// Adds every entry of the TOML catalog at `path`.
        pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> RegistryResult<usize> {
            let path = path.as_ref();
            let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("reading unit catalog {}", path.display());
            self.load_toml_str(&content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{
        Acceleration, Dimensionless, Energy, Length, Mass, Temperature, Velocity,
    };
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn builtin_symbols_are_unique() {
        let mut seen = HashSet::new();
        for row in units::TABLES.iter().flat_map(|t| t.iter()) {
            assert!(seen.insert(row.symbol), "duplicate built-in symbol {:?}", row.symbol);
        }
        for &(alias, target) in units::ALIASES {
            assert!(seen.contains(target), "alias {alias:?} points nowhere");
            assert!(seen.insert(alias), "alias {alias:?} shadows a unit");
        }
        assert_eq!(UnitRegistry::builtin().len(), seen.len());
    }

    #[test]
    fn builtin_rows_are_valid() {
        let registry = UnitRegistry::builtin();
        for symbol in registry.symbols() {
            let def = registry.lookup(symbol).unwrap();
            validate(def).unwrap();
        }
    }

    #[test]
    fn parses_simple_units() {
        let registry = UnitRegistry::global();
        let q: Quantity<Length> = registry.parse_quantity("12.3 km").unwrap();
        assert_relative_eq!(q.value(), 12_300.0);
        let q: Quantity<Mass, f32> = registry.parse_quantity("500g").unwrap();
        assert_relative_eq!(q.value(), 0.5_f32);
    }

    #[test]
    fn parses_compound_units() {
        let registry = UnitRegistry::global();
        let v: Quantity<Velocity> = registry.parse_quantity("100 km/h").unwrap();
        assert_relative_eq!(v.value(), 100.0 / 3.6, max_relative = 1e-12);
        let a: Quantity<Acceleration> = registry.parse_quantity("9.81 m/s^2").unwrap();
        assert_relative_eq!(a.value(), 9.81);
        let e: Quantity<Energy> = registry.parse_quantity("3 kg*m2/s2").unwrap();
        assert_relative_eq!(e.value(), 3.0);
    }

    #[test]
    fn parses_offset_units_alone() {
        let t: Quantity<Temperature> = UnitRegistry::global().parse_quantity("25 °C").unwrap();
        assert_relative_eq!(t.value(), 298.15);
        assert_eq!(
            UnitRegistry::global().resolve("degC/s"),
            Err(ParseQuantityError::AffineInCompound("degC".into()))
        );
        assert_eq!(
            UnitRegistry::global().resolve("degC^2"),
            Err(ParseQuantityError::AffineInCompound("degC".into()))
        );
    }

    #[test]
    fn missing_unit_only_for_dimensionless() {
        let registry = UnitRegistry::global();
        let q: Quantity<Dimensionless> = registry.parse_quantity("0.25").unwrap();
        assert_eq!(q.value(), 0.25);
        assert_eq!(
            registry.parse_quantity::<Length, f64>("3"),
            Err(ParseQuantityError::DimensionMismatch {
                expected: Length::EXPONENTS,
                found: Exponents::NONE,
            })
        );
    }

    #[test]
    fn rejects_exponent_overflow() {
        let registry = UnitRegistry::global();
        for text in [
            "1 m/s^-2147483648",
            "1 m^2147483647 m",
            "1 m^2147483647 m^2147483647 m^3",
            "1 km2^1073741824",
        ] {
            assert!(
                matches!(
                    registry.parse_quantity::<Length, f64>(text),
                    Err(ParseQuantityError::MalformedSignature { .. })
                ),
                "{text:?} should be rejected"
            );
        }
        assert!(matches!(
            registry.resolve("km^400 km^-400"),
            Err(ParseQuantityError::MalformedSignature { .. })
        ));
    }

    #[test]
    fn reports_unknown_and_mismatched_units() {
        let registry = UnitRegistry::global();
        assert_eq!(
            registry.parse_quantity::<Length, f64>("3 parsnips"),
            Err(ParseQuantityError::UnknownUnit("parsnips".into()))
        );
        assert!(matches!(
            registry.parse_quantity::<Length, f64>("3 s"),
            Err(ParseQuantityError::DimensionMismatch { .. })
        ));
        assert_eq!(
            registry.parse_quantity::<Length, f64>(""),
            Err(ParseQuantityError::Empty)
        );
    }

    #[test]
    fn insert_rejects_bad_entries() {
        let mut registry = UnitRegistry::builtin();
        let def = |symbol: &str, factor: f64| UnitDef {
            symbol: symbol.into(),
            exponents: Exponents::NONE,
            ratio: RatioKind::Scale { factor },
        };
        assert!(matches!(
            registry.insert(def("m", 2.0)),
            Err(RegistryError::DuplicateSymbol(_))
        ));
        for bad in ["", "2x", "a b", "m/s", "x^2"] {
            assert!(matches!(
                registry.insert(def(bad, 1.0)),
                Err(RegistryError::InvalidEntry { .. })
            ));
        }
        assert!(registry.insert(def("zilch", 0.0)).is_err());
        assert!(registry.insert(def("boom", f64::INFINITY)).is_err());
        registry.insert(def("dozen", 12.0)).unwrap();
        assert_eq!(registry.lookup("dozen").unwrap().ratio.factor(), 12.0);
    }

    #[test]
    fn define_rejects_offset_units() {
        let mut registry = UnitRegistry::builtin();
        assert!(matches!(
            registry.define("warm", "30 degC"),
            Err(RegistryError::InvalidEntry { .. })
        ));
        assert!(matches!(
            registry.define("bogus", "3 parsnips"),
            Err(RegistryError::Definition { .. })
        ));
    }

    #[cfg(feature = "catalog")]
    mod catalog {
        use super::*;
        use std::io::Write;

        const CATALOG: &str = r#"
            [[unit]]
            symbol = "furlong"
            definition = "201.168 m"

            [[unit]]
            symbol = "fortnight"
            definition = "14 d"

            [[unit]]
            symbol = "furlong_per_fortnight"
            definition = "1 furlong/fortnight"

            [[unit]]
            symbol = "smoot"
            factor = 1.7018
            dimension = [1, 0, 0, 0, 0]

            [[unit]]
            symbol = "degRe"
            factor = 1.25
            offset = 218.52
            dimension = [0, 0, 0, 1, 0]
        "#;

        #[test]
        fn loads_entries_in_order() {
            let registry = UnitRegistry::from_toml_str(CATALOG).unwrap();
            let v: Quantity<Velocity> = registry.parse_quantity("1 furlong_per_fortnight").unwrap();
            assert_relative_eq!(v.value(), 201.168 / (14.0 * 86_400.0), max_relative = 1e-12);

            let l: Quantity<Length> = registry.parse_quantity("364.4 smoot").unwrap();
            assert_relative_eq!(l.value(), 364.4 * 1.7018, max_relative = 1e-12);

            let t: Quantity<Temperature> = registry.parse_quantity("0 degRe").unwrap();
            assert_relative_eq!(t.value(), 273.15, max_relative = 1e-12);
        }

        #[test]
        fn failed_load_leaves_registry_unchanged() {
            let mut registry = UnitRegistry::builtin();
            let before = registry.len();
            let bad = r#"
                [[unit]]
                symbol = "furlong"
                definition = "201.168 m"

                [[unit]]
                symbol = "furlong"
                factor = 200.0
                dimension = [1, 0, 0, 0, 0]
            "#;
            assert!(matches!(
                registry.load_toml_str(bad),
                Err(RegistryError::DuplicateSymbol(_))
            ));
            assert_eq!(registry.len(), before);
            assert!(registry.lookup("furlong").is_none());
        }

        #[test]
        fn rejects_ambiguous_entries() {
            let both = r#"
                [[unit]]
                symbol = "x"
                definition = "1 m"
                factor = 1.0
            "#;
            assert!(matches!(
                UnitRegistry::from_toml_str(both),
                Err(RegistryError::InvalidEntry { .. })
            ));

            let neither = "[[unit]]\nsymbol = \"x\"\n";
            assert!(matches!(
                UnitRegistry::from_toml_str(neither),
                Err(RegistryError::InvalidEntry { .. })
            ));

            let typo = "[[unit]]\nsymbol = \"x\"\nfactr = 1.0\n";
            assert!(matches!(
                UnitRegistry::from_toml_str(typo),
                Err(RegistryError::Toml(_))
            ));
        }

        #[test]
        fn reads_catalog_files() {
            let dir = std::env::temp_dir().join(format!("dimsafe-catalog-{}", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            let path = dir.join("units.toml");
            std::fs::File::create(&path)
                .unwrap()
                .write_all(CATALOG.as_bytes())
                .unwrap();

            let registry = UnitRegistry::from_file(&path).unwrap();
            assert!(registry.lookup("smoot").is_some());

            let missing = UnitRegistry::from_file(dir.join("nope.toml"));
            assert!(matches!(missing, Err(RegistryError::Io { .. })));

            std::fs::remove_dir_all(&dir).unwrap();
        }
    }
}
