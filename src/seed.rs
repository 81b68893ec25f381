//! Seed Data
//!
//! Hardcoded lists used to populate (and reset) the screens.

use chrono::NaiveDate;

use crate::models::{
    Allergy, Difficulty, FoodItem, Ingredient, Preferences, Profile, RecipeRecommendation,
    SettingKind, SettingOption, UserIngredient,
};
use crate::navigation::Route;

/// Number of shelf slots in the pantry view
pub const SHELF_COUNT: u8 = 5;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// (name, shelf, year, month, day); the image index follows list order
const PANTRY_SEED: &[(&str, u8, i32, u32, u32)] = &[
    ("Veggies", 1, 2024, 4, 20),
    ("Spinach", 1, 2024, 4, 21),
    ("Chicken", 1, 2024, 4, 22),
    ("Cod fish", 2, 2024, 4, 23),
    ("Blueberries", 2, 2024, 4, 24),
    ("Yogurt", 2, 2024, 4, 25),
    ("Milk", 3, 2024, 4, 26),
    ("Canned Pasta", 3, 2024, 4, 27),
    ("Canned Veggies", 3, 2024, 4, 28),
    ("Tortilla", 4, 2024, 4, 29),
    ("Becel Butter", 4, 2024, 4, 30),
    ("Tofu", 4, 2024, 5, 1),
    ("Chicken Nuggets", 5, 2024, 5, 2),
    ("Tostitos", 5, 2024, 5, 3),
    ("Artichoke hearts", 5, 2024, 5, 4),
];

/// The 15 items spread over 5 shelves shown on first launch
pub fn pantry_items() -> Vec<FoodItem> {
    PANTRY_SEED
        .iter()
        .enumerate()
        .map(|(i, &(name, shelf_slot, y, m, d))| FoodItem {
            id: (i + 1).to_string(),
            name: name.to_string(),
            expiry_date: date(y, m, d),
            shelf_slot,
            image_index: i as u32 + 1,
        })
        .collect()
}

pub fn expiring_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient { id: "3".into(), name: "Chicken".into(), expiry_date: date(2024, 3, 23) },
        Ingredient { id: "2".into(), name: "Cheese".into(), expiry_date: date(2024, 3, 24) },
        Ingredient { id: "1".into(), name: "Milk".into(), expiry_date: date(2024, 3, 25) },
    ]
}

pub fn recipe_recommendations() -> Vec<RecipeRecommendation> {
    vec![
        RecipeRecommendation {
            id: "1".into(),
            name: "Creamy Spinach Chicken".into(),
            ingredients: vec!["Chicken".into(), "Spinach".into(), "Milk".into()],
            difficulty: Difficulty::Medium,
        },
        RecipeRecommendation {
            id: "2".into(),
            name: "Spinach Smoothie".into(),
            ingredients: vec!["Spinach".into(), "Milk".into()],
            difficulty: Difficulty::Easy,
        },
    ]
}

pub fn account_ingredients() -> Vec<UserIngredient> {
    vec![
        UserIngredient { id: "3".into(), name: "Chicken".into(), quantity: "2 lbs".into(), expiry_date: date(2024, 3, 23) },
        UserIngredient { id: "2".into(), name: "Cheese".into(), quantity: "1 bag".into(), expiry_date: date(2024, 3, 24) },
        UserIngredient { id: "1".into(), name: "Milk".into(), quantity: "1 gallon".into(), expiry_date: date(2024, 3, 25) },
    ]
}

pub fn settings() -> Vec<SettingOption> {
    let toggle = |id: &str, title: &str| SettingOption {
        id: id.into(),
        title: title.into(),
        kind: SettingKind::Toggle,
        value: Some(true),
        target_route: None,
    };
    let action = |id: &str, title: &str, route: Option<Route>| SettingOption {
        id: id.into(),
        title: title.into(),
        kind: SettingKind::Action,
        value: None,
        target_route: route,
    };

    vec![
        toggle("1", "Expiry Notifications"),
        toggle("2", "Daily Recipe Suggestions"),
        action("3", "Food Preferences", Some(Route::Preferences)),
        action("4", "Edit Profile", Some(Route::ProfileEdit)),
        action("5", "Help & Support", None),
    ]
}

pub fn preferences() -> Preferences {
    let allergy = |id: &str, name: &str| Allergy { id: id.into(), name: name.into(), selected: false };
    Preferences {
        family_size: 4,
        vegetarian: false,
        vegan: false,
        allergies: vec![
            allergy("1", "Peanuts"),
            allergy("2", "Dairy"),
            allergy("3", "Gluten"),
            allergy("4", "Shellfish"),
        ],
    }
}

pub fn profile() -> Profile {
    Profile {
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
    }
}
