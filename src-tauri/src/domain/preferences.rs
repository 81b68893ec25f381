//! Food Preferences
//!
//! Family size, dietary flags and allergy toggles.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allergy {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

impl Allergy {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            selected: false,
        }
    }
}

impl Entity for Allergy {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub family_size: u32,
    pub vegetarian: bool,
    pub vegan: bool,
    pub allergies: Vec<Allergy>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            family_size: 4,
            vegetarian: false,
            vegan: false,
            allergies: vec![
                Allergy::new("1", "Peanuts"),
                Allergy::new("2", "Dairy"),
                Allergy::new("3", "Gluten"),
                Allergy::new("4", "Shellfish"),
            ],
        }
    }
}

impl Preferences {
    pub fn validate(&self) -> DomainResult<()> {
        if self.family_size == 0 {
            return Err(DomainError::validation("family size must be a positive number"));
        }
        ensure_unique_ids(&self.allergies)
    }
}

/// List keys must be unique for toggles to target a single row
pub fn ensure_unique_ids<T: Entity>(entities: &[T]) -> DomainResult<()> {
    let mut seen = std::collections::HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(DomainError::validation("duplicate id in list"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_are_valid() {
        let prefs = Preferences::default();
        assert_eq!(prefs.family_size, 4);
        assert!(prefs.allergies.iter().all(|a| !a.selected));
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_zero_family_size_rejected() {
        let prefs = Preferences { family_size: 0, ..Default::default() };
        assert!(matches!(prefs.validate(), Err(DomainError::ValidationFailed(_))));
    }

    #[test]
    fn test_duplicate_allergy_ids_rejected() {
        let mut prefs = Preferences::default();
        prefs.allergies.push(Allergy::new("1", "Sesame"));
        assert!(prefs.validate().is_err());
    }
}
