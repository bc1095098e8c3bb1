//! Runtime unit registry.
//!
//! The typed API resolves units and relations at compile time. The [`Registry`] offers the same knowledge at
//! runtime, keyed by strings: unit symbols map to their dimension and descriptor, and the relation table answers
//! which dimension a product or quotient has. It backs [`DynQuantity`] and unit catalogs loaded from configuration
//! files.
//!
//! # Conversion formula
//!
//! ```text
//! canonical = raw_src * src.factor + src.offset
//! raw_dst   = (canonical - dst.offset) / dst.factor
//! ```
//!
//! ```rust
//! use mensura_core::Registry;
//! use rust_decimal_macros::dec;
//!
//! let registry = Registry::global();
//! assert_eq!(registry.convert(dec!(1), "mi", "ft").unwrap(), dec!(5280));
//! ```

use crate::catalog::UnitCatalog;
use crate::dimension::{Dimension, DimensionId, Relation};
use crate::dynamic::DynQuantity;
use crate::error::{QuantityError, Result};
use crate::unit::UnitDescriptor;
use crate::units;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::builtin);

/// A unit known to a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUnit {
    dimension: DimensionId,
    descriptor: UnitDescriptor,
}

impl RegisteredUnit {
    /// Dimension this unit measures.
    pub fn dimension(&self) -> DimensionId {
        self.dimension
    }

    /// Symbol, names and transform.
    pub fn descriptor(&self) -> &UnitDescriptor {
        &self.descriptor
    }
}

/// Units, dimensions and relations available at runtime.
#[derive(Debug, Clone)]
pub struct Registry {
    units: HashMap<String, RegisteredUnit>,
    dimensions: BTreeMap<&'static str, DimensionId>,
    relations: Vec<Relation>,
}

impl Registry {
    /// Registry of the predefined dimensions, units and relations.
    pub fn builtin() -> Self {
        let mut by_symbol = HashMap::new();
        let mut dimensions = BTreeMap::new();

        for (dimension, descriptors) in units::DIMENSIONS {
            dimensions.insert(dimension.name(), *dimension);
            for descriptor in descriptors.iter() {
                by_symbol.insert(
                    descriptor.symbol().to_string(),
                    RegisteredUnit {
                        dimension: *dimension,
                        descriptor: descriptor.clone(),
                    },
                );
            }
        }

        let registry = Self {
            units: by_symbol,
            dimensions,
            relations: units::relations::RELATIONS.to_vec(),
        };
        log::debug!(
            "built unit registry: {} units, {} dimensions, {} relations",
            registry.units.len(),
            registry.dimensions.len(),
            registry.relations.len()
        );
        registry
    }

    /// Shared built-in registry, built on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Returns this registry extended with the units of `catalog`.
    ///
    /// # Errors
    ///
    /// - [`QuantityError::UnknownDimension`] when an entry names a dimension the registry does not know.
    /// - [`QuantityError::Configuration`] when an entry reuses an existing symbol.
    ///
    /// Entries with a zero factor are accepted with a warning; converting *to* such a unit fails with
    /// [`QuantityError::DivideByZero`].
    pub fn with_catalog(mut self, catalog: &UnitCatalog) -> Result<Self> {
        for entry in catalog.units() {
            let dimension = self.dimension(&entry.dimension)?;
            self.register(dimension, entry.descriptor())?;
        }
        log::debug!(
            "merged {} catalog units, registry now holds {}",
            catalog.units().len(),
            self.units.len()
        );
        Ok(self)
    }

    /// Returns this registry extended with dimension `D` and its units.
    ///
    /// The canonical unit `D::CANONICAL` is registered even when `units` omits it.
    ///
    /// # Errors
    ///
    /// [`QuantityError::Configuration`] when the dimension name or a unit symbol is already taken.
    ///
    /// ```rust
    /// use mensura_core::{Dimension, DimensionId, Registry, UnitDescriptor};
    /// use rust_decimal_macros::dec;
    ///
    /// enum Information {}
    /// impl Dimension for Information {
    ///     const ID: DimensionId = DimensionId::new("information");
    ///     const CANONICAL: UnitDescriptor = UnitDescriptor::new("b", "bit", "bits", dec!(1));
    /// }
    ///
    /// let byte = UnitDescriptor::new("B", "byte", "bytes", dec!(8));
    /// let registry = Registry::builtin().with_dimension::<Information>(&[byte]).unwrap();
    /// assert_eq!(registry.convert(dec!(2), "B", "b").unwrap(), dec!(16));
    /// ```
    pub fn with_dimension<D: Dimension>(mut self, units: &[UnitDescriptor]) -> Result<Self> {
        let name = D::ID.name();
        if self.dimensions.contains_key(name) {
            return Err(QuantityError::Configuration(format!(
                "duplicate dimension '{}'",
                name
            )));
        }
        self.dimensions.insert(name, D::ID);

        let canonical = D::CANONICAL;
        if !units.iter().any(|u| u.symbol() == canonical.symbol()) {
            self.register(D::ID, canonical)?;
        }
        for descriptor in units {
            self.register(D::ID, descriptor.clone())?;
        }
        log::debug!("registered dimension '{}' with {} units", name, units.len());
        Ok(self)
    }

    /// Returns this registry extended with relation rows, typically the `RELATIONS` table of a
    /// [`relations!`](crate::relations) invocation.
    ///
    /// # Errors
    ///
    /// [`QuantityError::UnknownDimension`] when a row names a dimension that is not registered.
    pub fn with_relations(mut self, relations: &[Relation]) -> Result<Self> {
        for relation in relations {
            for id in [relation.lhs(), relation.rhs(), relation.output()] {
                self.dimension(id.name())?;
            }
        }
        self.relations.extend_from_slice(relations);
        log::debug!(
            "added {} relations, registry now holds {}",
            relations.len(),
            self.relations.len()
        );
        Ok(self)
    }

    fn register(&mut self, dimension: DimensionId, descriptor: UnitDescriptor) -> Result<()> {
        let symbol = descriptor.symbol().to_string();
        if self.units.contains_key(&symbol) {
            return Err(QuantityError::Configuration(format!(
                "duplicate unit symbol '{}'",
                symbol
            )));
        }
        if descriptor.factor().is_zero() {
            log::warn!(
                "unit '{}' has a zero factor; conversions into it will fail",
                symbol
            );
        }
        self.units.insert(
            symbol,
            RegisteredUnit {
                dimension,
                descriptor,
            },
        );
        Ok(())
    }

    /// Looks up a unit by symbol.
    pub fn unit(&self, symbol: &str) -> Result<&RegisteredUnit> {
        self.units
            .get(symbol)
            .ok_or_else(|| QuantityError::UnknownUnit(symbol.to_string()))
    }

    /// Looks up a dimension by name.
    pub fn dimension(&self, name: &str) -> Result<DimensionId> {
        self.dimensions
            .get(name)
            .copied()
            .ok_or_else(|| QuantityError::UnknownDimension(name.to_string()))
    }

    /// Every registered unit, in no particular order.
    pub fn units(&self) -> impl Iterator<Item = &RegisteredUnit> {
        self.units.values()
    }

    /// Every known dimension, sorted by name.
    pub fn dimensions(&self) -> impl Iterator<Item = DimensionId> + '_ {
        self.dimensions.values().copied()
    }

    /// The relation table.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Dimension of `a × b`.
    pub fn product(&self, a: DimensionId, b: DimensionId) -> Result<DimensionId> {
        self.relations
            .iter()
            .find_map(|rel| rel.multiply(a, b))
            .ok_or(QuantityError::DimensionMismatch {
                op: "*",
                left: a,
                right: b,
            })
    }

    /// Dimension of `c / b`.
    pub fn quotient(&self, c: DimensionId, b: DimensionId) -> Result<DimensionId> {
        self.relations
            .iter()
            .find_map(|rel| rel.divide(c, b))
            .ok_or(QuantityError::DimensionMismatch {
                op: "/",
                left: c,
                right: b,
            })
    }

    /// Converts a raw value between two units of the same dimension.
    pub fn convert(&self, value: Decimal, from: &str, to: &str) -> Result<Decimal> {
        let quantity = self.quantity(value, from)?;
        self.express(&quantity, to)
    }

    /// Builds a runtime quantity from a raw value in the unit named `symbol`.
    pub fn quantity(&self, raw: Decimal, symbol: &str) -> Result<DynQuantity> {
        let unit = self.unit(symbol)?;
        let magnitude = unit.descriptor.to_canonical(raw)?;
        Ok(DynQuantity::new(magnitude, unit.dimension))
    }

    /// Expresses a runtime quantity in the unit named `symbol`.
    pub fn express(&self, quantity: &DynQuantity, symbol: &str) -> Result<Decimal> {
        let unit = self.unit(symbol)?;
        if unit.dimension != quantity.dimension() {
            return Err(QuantityError::DimensionMismatch {
                op: "as",
                left: quantity.dimension(),
                right: unit.dimension,
            });
        }
        unit.descriptor.from_canonical(quantity.magnitude())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
