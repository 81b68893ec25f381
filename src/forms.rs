//! Account/Preferences Forms
//!
//! Client-side validation and toggle helpers. Nothing here talks to the
//! backend; screens call the ProfileStore commands once validation passes.

use std::fmt;

use crate::models::{Preferences, SettingKind, SettingOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    CurrentPasswordRequired,
    PasswordsDoNotMatch,
    NameRequired,
    EmailRequired,
    InvalidFamilySize,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::CurrentPasswordRequired => "current password required",
            ValidationError::PasswordsDoNotMatch => "passwords do not match",
            ValidationError::NameRequired => "name required",
            ValidationError::EmailRequired => "email required",
            ValidationError::InvalidFamilySize => "family size must be a positive number",
        };
        f.write_str(msg)
    }
}

/// Raw password fields from the profile-edit screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    /// True when the user typed into either new-password field
    pub fn is_requested(&self) -> bool {
        !self.new.is_empty() || !self.confirm.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.is_requested() {
            return Ok(());
        }
        if self.current.is_empty() {
            return Err(ValidationError::CurrentPasswordRequired);
        }
        if self.new != self.confirm {
            return Err(ValidationError::PasswordsDoNotMatch);
        }
        Ok(())
    }
}

/// Required-field check for the profile fields, then the password rules
pub fn validate_profile(name: &str, email: &str, password: &PasswordChange) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    password.validate()
}

pub fn parse_family_size(raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::InvalidFamilySize),
    }
}

/// Flip one allergy; the others are untouched
pub fn toggle_allergy(prefs: &mut Preferences, id: &str) {
    if let Some(allergy) = prefs.allergies.iter_mut().find(|a| a.id == id) {
        allergy.selected = !allergy.selected;
    }
}

/// Flip a toggle setting. Action rows are left alone.
pub fn toggle_setting(settings: &mut [SettingOption], id: &str) {
    if let Some(setting) = settings
        .iter_mut()
        .find(|s| s.id == id && s.kind == SettingKind::Toggle)
    {
        setting.value = Some(!setting.value.unwrap_or(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn change(current: &str, new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current: current.into(),
            new: new.into(),
            confirm: confirm.into(),
        }
    }

    #[test]
    fn test_current_password_required() {
        let err = change("", "x", "x").validate().unwrap_err();
        assert_eq!(err, ValidationError::CurrentPasswordRequired);
        assert_eq!(err.to_string(), "current password required");
    }

    #[test]
    fn test_passwords_do_not_match() {
        let err = change("a", "x", "y").validate().unwrap_err();
        assert_eq!(err, ValidationError::PasswordsDoNotMatch);
        assert_eq!(err.to_string(), "passwords do not match");
    }

    #[test]
    fn test_valid_password_change() {
        assert!(change("a", "x", "x").validate().is_ok());
    }

    #[test]
    fn test_no_password_change_skips_checks() {
        assert!(change("", "", "").validate().is_ok());
        // Only confirm typed still counts as a change request
        assert_eq!(
            change("", "", "y").validate(),
            Err(ValidationError::CurrentPasswordRequired)
        );
    }

    #[test]
    fn test_profile_required_fields() {
        let none = PasswordChange::default();
        assert_eq!(validate_profile("  ", "a@b.c", &none), Err(ValidationError::NameRequired));
        assert_eq!(validate_profile("Jo", "", &none), Err(ValidationError::EmailRequired));
        assert!(validate_profile("Jo", "jo@example.com", &none).is_ok());
    }

    #[test]
    fn test_parse_family_size() {
        assert_eq!(parse_family_size(" 4 "), Ok(4));
        assert_eq!(parse_family_size("0"), Err(ValidationError::InvalidFamilySize));
        assert_eq!(parse_family_size("four"), Err(ValidationError::InvalidFamilySize));
    }

    #[test]
    fn test_allergy_toggles_are_independent() {
        let mut prefs = seed::preferences();
        toggle_allergy(&mut prefs, "2");
        toggle_allergy(&mut prefs, "4");
        let selected: Vec<_> = prefs.allergies.iter().filter(|a| a.selected).map(|a| a.name.as_str()).collect();
        assert_eq!(selected, vec!["Dairy", "Shellfish"]);
        toggle_allergy(&mut prefs, "2");
        assert!(!prefs.allergies[1].selected);
        assert!(prefs.allergies[3].selected);
    }

    #[test]
    fn test_toggle_setting_only_flips_toggles() {
        let mut settings = seed::settings();
        toggle_setting(&mut settings, "1");
        toggle_setting(&mut settings, "3");
        assert_eq!(settings[0].value, Some(false));
        assert_eq!(settings[2].value, None);
    }
}
