//! Profile
//!
//! Public profile fields, the password-change request and its rules.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
        }
    }
}

/// Save request coming from the profile-edit screen
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

impl ProfileUpdate {
    /// New password, if one was actually typed
    pub fn requested_password(&self) -> Option<&str> {
        self.new_password.as_deref().filter(|p| !p.is_empty())
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name required"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(DomainError::validation("invalid email address"));
        }
        if self.requested_password().is_some()
            && self.current_password.as_deref().unwrap_or("").is_empty()
        {
            return Err(DomainError::validation("current password required"));
        }
        Ok(())
    }

    /// Hash to store after this update. `Ok(None)` keeps the stored one.
    /// With no stored password yet the current field is not checked.
    pub fn next_password_digest(&self, stored: Option<&str>) -> DomainResult<Option<String>> {
        let Some(new_password) = self.requested_password() else {
            return Ok(None);
        };
        if let Some(stored) = stored {
            let current = self.current_password.as_deref().unwrap_or("");
            if !verify_password(current, stored) {
                return Err(DomainError::validation("current password is incorrect"));
            }
        }
        hash_password(new_password).map(Some)
    }

    pub fn profile(&self) -> Profile {
        Profile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Salted Argon2 PHC string stored in place of the password
pub fn hash_password(password: &str) -> DomainResult<String> {
    use argon2::password_hash::rand_core::OsRng;
    use argon2::password_hash::SaltString;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
