//! Inventory ingredients.

use std::cmp::Ordering;

use super::taxonomy::IngredientType;
use crate::store::{Inventory, StoreError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stockable item in the bar inventory.
///
/// # Invariants
///
/// - `name` identifies the ingredient; specs reference it by exact match
/// - `price == None` means the ingredient costs nothing to plan for and does
///   not count as a priced purchase; `Some(0)` is priced at zero
/// - name uniqueness (case-insensitive) is enforced by [`Inventory`], not here
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Ingredient {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: IngredientType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtype: String,
    pub stock: bool,
    #[cfg_attr(feature = "serde", serde(default, with = "price_text"))]
    pub price: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub supplier: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub restock: bool,
}

impl Ingredient {
    /// Creates an out-of-stock, unpriced ingredient of the default category.
    pub fn new(name: impl Into<String>) -> Self {
        let kind = IngredientType::default();
        Self {
            name: name.into(),
            kind,
            subtype: kind.default_subtype().to_string(),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: IngredientType, subtype: impl Into<String>) -> Self {
        self.kind = kind;
        self.subtype = subtype.into();
        self
    }

    pub fn with_stock(mut self, stock: bool) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    pub fn with_restock(mut self, restock: bool) -> Self {
        self.restock = restock;
        self
    }

    /// Cost used for planning; unpriced ingredients cost nothing.
    pub fn cost(&self) -> u64 {
        u64::from(self.price.unwrap_or(0))
    }

    pub fn is_priced(&self) -> bool {
        self.price.is_some()
    }

    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Returns true if no ingredient in `inventory` shares this name, ignoring case.
    pub fn has_unique_name(&self, inventory: &Inventory) -> bool {
        inventory
            .ingredients()
            .iter()
            .all(|existing| !same_name(&existing.name, &self.name))
    }

    /// Parses a user-entered price: blank is unset, otherwise a whole number.
    pub fn parse_price(raw: &str) -> Result<Option<u32>, StoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<u32>()
            .map(Some)
            .map_err(|_| StoreError::InvalidPrice(raw.to_string()))
    }

    pub fn trim_strings(&mut self) {
        self.name = self.name.trim().to_string();
        self.supplier = self.supplier.trim().to_string();
        self.notes = self.notes.trim_matches([' ', '\t']).to_string();
    }
}

impl PartialOrd for Ingredient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ingredient {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.subtype.cmp(&other.subtype))
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.price.cmp(&other.price))
            .then_with(|| self.stock.cmp(&other.stock))
            .then_with(|| self.restock.cmp(&other.restock))
            .then_with(|| self.supplier.cmp(&other.supplier))
            .then_with(|| self.notes.cmp(&other.notes))
    }
}

/// Case-insensitive name comparison used for uniqueness checks.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

/// Prices are persisted as text: an empty string when unset, digits otherwise.
#[cfg(feature = "serde")]
mod price_text {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(price: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
        match price {
            Some(p) => serializer.serialize_str(&p.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        struct PriceVisitor;

        impl<'de> Visitor<'de> for PriceVisitor {
            type Value = Option<u32>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an empty string, a whole-number string, or a non-negative integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                super::Ingredient::parse_price(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v).map(Some).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u32::try_from(v).map(Some).map_err(E::custom)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}
