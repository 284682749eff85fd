//! Validation for loaded animal definitions.

use super::registry::Catalog;
use crate::puzzles::DifficultyPolicy;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub animal_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Animal '{}' has invalid field '{}': {}",
            self.animal_id, self.field, self.message
        )
    }
}

/// Validate every animal in the catalog.
/// Returns a list of validation errors, empty if all animals are usable.
pub fn validate_content(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for animal in catalog.iter() {
        if animal.id.trim().is_empty() {
            errors.push(ValidationError {
                animal_id: animal.id.clone(),
                field: "id",
                message: "must not be blank".to_string(),
            });
        }

        if animal.name.trim().is_empty() {
            errors.push(ValidationError {
                animal_id: animal.id.clone(),
                field: "name",
                message: "must not be blank".to_string(),
            });
        }

        if animal.level == 0 {
            errors.push(ValidationError {
                animal_id: animal.id.clone(),
                field: "level",
                message: "must be greater than 0".to_string(),
            });
        } else if let Err(e) = DifficultyPolicy::for_level(animal.level) {
            errors.push(ValidationError {
                animal_id: animal.id.clone(),
                field: "level",
                message: e.to_string(),
            });
        }
    }

    errors
}
