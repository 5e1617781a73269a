//! Closed taxonomies used to classify ingredients and specs.
//!
//! Every taxonomy lists its valid values in an `ALL` constant so pickers and
//! parsers never need to enumerate variants at runtime.
//!
//! | Taxonomy         | Used by                    |
//! |------------------|----------------------------|
//! | `IngredientType` | [`Ingredient::kind`]       |
//! | `CocktailType`   | [`Spec::kind`]             |
//! | `Glassware`      | [`Spec::glassware`]        |
//! | `Ice`            | [`Spec::ice`]              |
//!
//! [`Ingredient::kind`]: crate::model::Ingredient::kind
//! [`Spec::kind`]: crate::model::Spec::kind
//! [`Spec::glassware`]: crate::model::Spec::glassware
//! [`Spec::ice`]: crate::model::Spec::ice

use std::fmt;
use std::str::FromStr;

use crate::store::StoreError;

/// Finds the variant whose label matches `value`, ignoring ASCII case.
fn parse_label<T: Copy>(
    all: &[T],
    label: impl Fn(T) -> &'static str,
    kind: &'static str,
    value: &str,
) -> Result<T, StoreError> {
    let value = value.trim();
    all.iter()
        .copied()
        .find(|v| label(*v).eq_ignore_ascii_case(value))
        .ok_or_else(|| StoreError::UnknownVariant {
            kind,
            value: value.to_string(),
        })
}

/// Broad category of a stockable ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum IngredientType {
    #[default]
    Base,
    Modifier,
    Bitters,
    Sweetener,
    Juice,
    Topper,
    Other,
}

impl IngredientType {
    pub const ALL: [IngredientType; 7] = [
        Self::Base,
        Self::Modifier,
        Self::Bitters,
        Self::Sweetener,
        Self::Juice,
        Self::Topper,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Modifier => "Modifier",
            Self::Bitters => "Bitters",
            Self::Sweetener => "Sweetener",
            Self::Juice => "Juice",
            Self::Topper => "Topper",
            Self::Other => "Other",
        }
    }

    /// Valid subtypes for this category. Empty when the category has none.
    pub fn subtypes(self) -> &'static [&'static str] {
        match self {
            Self::Base => &[
                "Brandy", "Gin", "Mezcal", "Rum", "Tequila", "Vodka", "Whiskey", "Other",
            ],
            // fortified wine covers sherry, port and madeira
            Self::Modifier => &[
                "Amaro / Aperitif / Digestif",
                "Fortified Wine",
                "Liqueur",
                "Vermouth",
            ],
            _ => &[],
        }
    }

    /// First subtype of the category, or an empty string.
    pub fn default_subtype(self) -> &'static str {
        self.subtypes().first().copied().unwrap_or("")
    }
}

impl fmt::Display for IngredientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IngredientType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "ingredient type", s)
    }
}

/// Family a drink spec belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CocktailType {
    /// Spirit driven, lightly sweetened, seasoned with bitters.
    #[default]
    OldFashioned,
    /// Spirit and aromatized wine.
    Martini,
    /// Spirit, citrus and sweetener.
    Daiquiri,
    /// Spirit balanced by a flavorful liqueur and citrus.
    Sidecar,
    /// Spirit lengthened with a nonalcoholic mixer.
    WhiskeyHighball,
    /// Spirit or fortified wine with a rich ingredient.
    Flip,
}

impl CocktailType {
    pub const ALL: [CocktailType; 6] = [
        Self::OldFashioned,
        Self::Martini,
        Self::Daiquiri,
        Self::Sidecar,
        Self::WhiskeyHighball,
        Self::Flip,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::OldFashioned => "Old-Fashioned",
            Self::Martini => "Martini",
            Self::Daiquiri => "Daiquiri",
            Self::Sidecar => "Sidecar",
            Self::WhiskeyHighball => "Whiskey Highball",
            Self::Flip => "Flip",
        }
    }
}

impl fmt::Display for CocktailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CocktailType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "cocktail type", s)
    }
}

/// Serving glass, with typical capacity in ounces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Glassware {
    #[default]
    Coupe, // 5 to 9¾
    DoubleRocks, // 13 or 14
    Highball,    // 11 or 12
    Julep,       // 13
    NickAndNora, // 5 or 6
    Pilsner,     // 12 or 16
    Punch,
    SingleRocks, // 9 or 9½
}

impl Glassware {
    pub const ALL: [Glassware; 8] = [
        Self::Coupe,
        Self::DoubleRocks,
        Self::Highball,
        Self::Julep,
        Self::NickAndNora,
        Self::Pilsner,
        Self::Punch,
        Self::SingleRocks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Coupe => "Coupe",
            Self::DoubleRocks => "Double rocks",
            Self::Highball => "Highball",
            Self::Julep => "Julep",
            Self::NickAndNora => "Nick & Nora",
            Self::Pilsner => "Pilsner",
            Self::Punch => "Punch bowl",
            Self::SingleRocks => "Single rocks",
        }
    }
}

impl fmt::Display for Glassware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Glassware {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "glassware", s)
    }
}

/// Ice used when serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Ice {
    #[default]
    None,
    OneAndOneQuarterInchCubes,
    TwoInchCube,
    Crushed,
    Sphere,
}

impl Ice {
    pub const ALL: [Ice; 5] = [
        Self::None,
        Self::OneAndOneQuarterInchCubes,
        Self::TwoInchCube,
        Self::Crushed,
        Self::Sphere,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::OneAndOneQuarterInchCubes => "1¼-in cubes",
            Self::TwoInchCube => "2-in cube",
            Self::Crushed => "Crushed",
            Self::Sphere => "Large sphere",
        }
    }
}

impl fmt::Display for Ice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Ice {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "ice", s)
    }
}

// Taxonomies persist as their display label, matching the stored collections.
#[cfg(feature = "serde")]
macro_rules! label_serde {
    ($($ty:ty),* $(,)?) => {$(
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    )*};
}

#[cfg(feature = "serde")]
label_serde!(IngredientType, CocktailType, Glassware, Ice);
