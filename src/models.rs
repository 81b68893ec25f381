//! Frontend Models
//!
//! Data structures shared by the screens and matching backend entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A food item placed on one of the five pantry shelves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub expiry_date: NaiveDate,
    /// Shelf slot, 1..=5
    pub shelf_slot: u8,
    /// Index into the bundled food artwork
    pub image_index: u32,
}

/// Food/expiry pair returned by the scan endpoint (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedItem {
    pub food: String,
    pub expiry: NaiveDate,
}

/// Image chosen through the native picker (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickedImage {
    pub path: String,
    /// `data:` URL for the thumbnail, if the file could be read
    pub preview: Option<String>,
}

/// An ingredient close to its expiry date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub expiry_date: NaiveDate,
}

/// Ingredient shown on the account screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIngredient {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecommendation {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Toggle,
    Action,
}

/// Row in the account settings list
#[derive(Debug, Clone, PartialEq)]
pub struct SettingOption {
    pub id: String,
    pub title: String,
    pub kind: SettingKind,
    /// Only meaningful for toggles
    pub value: Option<bool>,
    /// Where an action row navigates to; `None` for informational actions
    pub target_route: Option<crate::navigation::Route>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allergy {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// Food preferences (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub family_size: u32,
    pub vegetarian: bool,
    pub vegan: bool,
    pub allergies: Vec<Allergy>,
}

/// Public profile fields (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}
