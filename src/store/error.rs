use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name already exists: {0}")]
    DuplicateName(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Cannot rename {from:?} to {to:?} here; rename through the bar")]
    NameChanged { from: String, to: String },

    #[error("Price must be empty or a whole number: {0:?}")]
    InvalidPrice(String),

    #[error("Spec must have at least one ingredient")]
    MissingIngredients,

    #[error("Spec ingredient {0} has no name")]
    InvalidIngredient(usize),

    #[error("Spec must have at least one direction")]
    MissingDirections,

    #[error("Spec direction {0} is empty")]
    InvalidDirection(usize),

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Malformed collection: {0}")]
    Json(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_display() {
        assert_eq!(StoreError::EmptyName.to_string(), "Name cannot be empty");
    }

    #[test]
    fn duplicate_name_display() {
        let e = StoreError::DuplicateName("Gin".to_string());
        assert_eq!(e.to_string(), "Name already exists: Gin");
    }

    #[test]
    fn invalid_price_display_quotes_input() {
        let e = StoreError::InvalidPrice("12.50".to_string());
        assert_eq!(e.to_string(), "Price must be empty or a whole number: \"12.50\"");
    }

    #[test]
    fn positional_errors_display_index() {
        assert_eq!(
            StoreError::InvalidIngredient(2).to_string(),
            "Spec ingredient 2 has no name"
        );
        assert_eq!(
            StoreError::InvalidDirection(0).to_string(),
            "Spec direction 0 is empty"
        );
    }

    #[test]
    fn unknown_variant_display() {
        let e = StoreError::UnknownVariant {
            kind: "ice",
            value: "cubed".to_string(),
        };
        assert_eq!(e.to_string(), "Unknown ice: cubed");
    }

    #[test]
    fn name_changed_display() {
        let e = StoreError::NameChanged {
            from: "Gin".to_string(),
            to: "Plymouth".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Cannot rename \"Gin\" to \"Plymouth\" here; rename through the bar"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(StoreError::EmptyName, StoreError::EmptyName);
        assert_ne!(StoreError::EmptyName, StoreError::MissingDirections);
    }
}
