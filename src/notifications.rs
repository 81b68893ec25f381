//! Notification/Recommendation List
//!
//! Expiry urgency derived from the current date.

use chrono::NaiveDate;

use crate::models::Ingredient;

/// Alert colour for an expiring ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Expires today
    Accent,
    /// One or two days left
    SecondaryDark,
    PrimaryDark,
}

impl Urgency {
    pub fn for_days(days: u32) -> Self {
        match days {
            0 => Urgency::Accent,
            1..=2 => Urgency::SecondaryDark,
            _ => Urgency::PrimaryDark,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Urgency::Accent => "#e02d00",
            Urgency::SecondaryDark => "#000A2E",
            Urgency::PrimaryDark => "#7494d1",
        }
    }
}

/// Whole days from `today` until `expiry`, clamped at zero
pub fn days_until_expiry(expiry: NaiveDate, today: NaiveDate) -> u32 {
    let days = (expiry - today).num_days();
    days.max(0) as u32
}

pub fn expiry_label(days: u32) -> String {
    match days {
        0 => "Expires today!".to_string(),
        1 => "Expires in 1 day".to_string(),
        n => format!("Expires in {} days", n),
    }
}

/// An ingredient with its urgency worked out for display
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryNotice {
    pub ingredient: Ingredient,
    pub days_until_expiry: u32,
    /// Date already passed; `days_until_expiry` is clamped to 0
    pub expired: bool,
    pub urgency: Urgency,
}

impl ExpiryNotice {
    pub fn label(&self) -> String {
        if self.expired {
            "Expired".to_string()
        } else {
            expiry_label(self.days_until_expiry)
        }
    }
}

/// Build notices, soonest expiry first
pub fn expiry_notices(ingredients: &[Ingredient], today: NaiveDate) -> Vec<ExpiryNotice> {
    let mut notices: Vec<ExpiryNotice> = ingredients
        .iter()
        .map(|ingredient| {
            let days = days_until_expiry(ingredient.expiry_date, today);
            ExpiryNotice {
                ingredient: ingredient.clone(),
                days_until_expiry: days,
                expired: ingredient.expiry_date < today,
                urgency: Urgency::for_days(days),
            }
        })
        .collect();
    notices.sort_by_key(|n| n.days_until_expiry);
    notices
}

/// Local calendar date in the browser/webview
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_urgency_thresholds() {
        assert_eq!(Urgency::for_days(0), Urgency::Accent);
        assert_eq!(Urgency::for_days(1), Urgency::SecondaryDark);
        assert_eq!(Urgency::for_days(2), Urgency::SecondaryDark);
        assert_eq!(Urgency::for_days(3), Urgency::PrimaryDark);
        assert_eq!(Urgency::for_days(0).color(), "#e02d00");
    }

    #[test]
    fn test_days_until_expiry() {
        let today = d(2024, 3, 23);
        assert_eq!(days_until_expiry(d(2024, 3, 23), today), 0);
        assert_eq!(days_until_expiry(d(2024, 3, 25), today), 2);
        assert_eq!(days_until_expiry(d(2024, 3, 1), today), 0);
    }

    #[test]
    fn test_expiry_label() {
        assert_eq!(expiry_label(0), "Expires today!");
        assert_eq!(expiry_label(1), "Expires in 1 day");
        assert_eq!(expiry_label(4), "Expires in 4 days");
    }

    #[test]
    fn test_notices_sorted_soonest_first() {
        let ingredients = vec![
            Ingredient { id: "1".into(), name: "Milk".into(), expiry_date: d(2024, 3, 28) },
            Ingredient { id: "3".into(), name: "Chicken".into(), expiry_date: d(2024, 3, 23) },
            Ingredient { id: "2".into(), name: "Cheese".into(), expiry_date: d(2024, 3, 24) },
        ];
        let notices = expiry_notices(&ingredients, d(2024, 3, 23));
        let names: Vec<_> = notices.iter().map(|n| n.ingredient.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken", "Cheese", "Milk"]);
        assert_eq!(notices[0].urgency, Urgency::Accent);
        assert_eq!(notices[1].urgency, Urgency::SecondaryDark);
        assert_eq!(notices[2].urgency, Urgency::PrimaryDark);
    }

    #[test]
    fn test_past_date_labelled_expired() {
        let ingredients = vec![
            Ingredient { id: "1".into(), name: "Yogurt".into(), expiry_date: d(2024, 3, 20) },
            Ingredient { id: "2".into(), name: "Bread".into(), expiry_date: d(2024, 3, 23) },
        ];
        let notices = expiry_notices(&ingredients, d(2024, 3, 23));

        let yogurt = &notices[0];
        assert_eq!(yogurt.ingredient.name, "Yogurt");
        assert!(yogurt.expired);
        assert_eq!(yogurt.days_until_expiry, 0);
        assert_eq!(yogurt.urgency, Urgency::Accent);
        assert_eq!(yogurt.label(), "Expired");

        let bread = &notices[1];
        assert!(!bread.expired);
        assert_eq!(bread.label(), "Expires today!");
    }
}
