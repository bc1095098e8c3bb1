//! Unit catalog file support.
//!
//! A catalog adds named units to a [`Registry`](crate::Registry) without recompiling. It is a TOML file of
//! `[[unit]]` tables; factors and offsets are decimal strings so no precision is lost to binary floats:
//!
//! ```toml
//! [[unit]]
//! dimension = "length"
//! symbol = "fur"
//! singular = "furlong"
//! plural = "furlongs"
//! factor = "201.168"
//!
//! [[unit]]
//! dimension = "temperature"
//! symbol = "°Ré"
//! singular = "degree Réaumur"
//! plural = "degrees Réaumur"
//! factor = "1.25"
//! offset = "273.15"
//! ```

use crate::error::{QuantityError, Result};
use crate::unit::UnitDescriptor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A set of unit definitions read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitCatalog {
    #[serde(default, rename = "unit")]
    units: Vec<UnitEntry>,
}

/// One `[[unit]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    /// Name of an existing dimension (`"length"`, `"energy"`, …).
    pub dimension: String,
    /// Unit symbol; must not clash with a registered unit.
    pub symbol: String,
    /// Singular name.
    pub singular: String,
    /// Plural name.
    pub plural: String,
    /// Multiplicative factor to the canonical unit.
    #[serde(with = "rust_decimal::serde::str")]
    pub factor: Decimal,
    /// Additive offset to the canonical unit.
    #[serde(default, with = "rust_decimal::serde::str")]
    pub offset: Decimal,
}

impl UnitEntry {
    /// The runtime descriptor of this entry.
    pub fn descriptor(&self) -> UnitDescriptor {
        UnitDescriptor::owned(
            self.symbol.as_str(),
            self.singular.as_str(),
            self.plural.as_str(),
            self.factor,
            self.offset,
        )
    }
}

impl UnitCatalog {
    /// Builds a catalog from entries.
    pub fn new(units: Vec<UnitEntry>) -> Self {
        Self { units }
    }

    /// The catalog entries, in file order.
    pub fn units(&self) -> &[UnitEntry] {
        &self.units
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the catalog as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            QuantityError::Configuration(format!("Failed to render unit catalog: {}", e))
        })
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the catalog file
    ///
    /// # Returns
    /// * `Ok(UnitCatalog)` if the file was read and parsed
    /// * `Err(QuantityError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            QuantityError::Configuration(format!(
                "Failed to read unit catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        let catalog = Self::from_toml_str(&content)?;
        log::info!("loaded {} units from {}", catalog.units.len(), path.display());
        Ok(catalog)
    }
}

impl FromStr for UnitCatalog {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Length;
    use crate::{Dimension, Registry};
    use rust_decimal_macros::dec;
    use std::io::Write;

    const FURLONG: &str = r#"
[[unit]]
dimension = "length"
symbol = "fur"
singular = "furlong"
plural = "furlongs"
factor = "201.168"
"#;

    // ─────────────────────────────────────────────────────────────────────────────
    // Parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_catalog() {
        let catalog: UnitCatalog = FURLONG.parse().unwrap();
        assert_eq!(catalog.units().len(), 1);
        let entry = &catalog.units()[0];
        assert_eq!(entry.symbol, "fur");
        assert_eq!(entry.factor, dec!(201.168));
        assert_eq!(entry.offset, Decimal::ZERO);
    }

    #[test]
    fn parse_offset_at_full_precision() {
        let toml = r#"
[[unit]]
dimension = "temperature"
symbol = "°Ré"
singular = "degree Réaumur"
plural = "degrees Réaumur"
factor = "1.25"
offset = "273.15"
"#;
        let catalog = UnitCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.units()[0].offset, dec!(273.15));
    }

    #[test]
    fn empty_catalog() {
        let catalog = UnitCatalog::from_toml_str("").unwrap();
        assert!(catalog.units().is_empty());
    }

    #[test]
    fn parse_errors_are_configuration_errors() {
        let missing_factor = r#"
[[unit]]
dimension = "length"
symbol = "x"
singular = "x"
plural = "x"
"#;
        assert!(matches!(
            UnitCatalog::from_toml_str(missing_factor),
            Err(QuantityError::Configuration(_))
        ));
        assert!(matches!(
            UnitCatalog::from_toml_str(&FURLONG.replace("201.168", "two hundred")),
            Err(QuantityError::Configuration(_))
        ));
    }

    #[test]
    fn toml_round_trip() {
        let catalog = UnitCatalog::from_toml_str(FURLONG).unwrap();
        let text = catalog.to_toml_string().unwrap();
        assert_eq!(UnitCatalog::from_toml_str(&text).unwrap(), catalog);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Files
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FURLONG.as_bytes()).unwrap();
        let catalog = UnitCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.units()[0].singular, "furlong");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = UnitCatalog::from_file(dir.path().join("units.toml")).unwrap_err();
        assert!(matches!(err, QuantityError::Configuration(ref msg) if msg.contains("units.toml")));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Registry merge
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn merged_units_convert() {
        let catalog = UnitCatalog::from_toml_str(FURLONG).unwrap();
        let registry = Registry::builtin().with_catalog(&catalog).unwrap();
        assert_eq!(registry.unit("fur").unwrap().dimension(), Length::ID);
        assert_eq!(registry.convert(dec!(8), "fur", "mi").unwrap(), dec!(1));
    }

    #[test]
    fn unknown_dimension_is_rejected() {
        let catalog = UnitCatalog::from_toml_str(&FURLONG.replace("\"length\"", "\"luminosity\"")).unwrap();
        assert_eq!(
            Registry::builtin().with_catalog(&catalog).unwrap_err(),
            QuantityError::UnknownDimension("luminosity".to_string())
        );
    }

    #[test]
    fn duplicate_symbol_is_rejected() {
        let catalog = UnitCatalog::from_toml_str(&FURLONG.replace("\"fur\"", "\"ft\"")).unwrap();
        assert!(matches!(
            Registry::builtin().with_catalog(&catalog),
            Err(QuantityError::Configuration(ref msg)) if msg.contains("'ft'")
        ));

        let furlong = UnitCatalog::from_toml_str(FURLONG).unwrap().units()[0].clone();
        let twice = UnitCatalog::new(vec![furlong.clone(), furlong]);
        assert!(matches!(
            Registry::builtin().with_catalog(&twice),
            Err(QuantityError::Configuration(ref msg)) if msg.contains("'fur'")
        ));
    }

    #[test]
    fn zero_factor_is_accepted_but_cannot_be_converted_into() {
        let catalog = UnitCatalog::from_toml_str(&FURLONG.replace("201.168", "0")).unwrap();
        let registry = Registry::builtin().with_catalog(&catalog).unwrap();
        assert_eq!(registry.convert(dec!(5), "fur", "m").unwrap(), Decimal::ZERO);
        assert_eq!(
            registry.convert(dec!(5), "m", "fur"),
            Err(QuantityError::DivideByZero)
        );
    }
}
