//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the profile/preferences store.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, Preferences, Profile, ProfileUpdate};

/// Single-user profile and food preferences
///
/// All operations are async to support various backends.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the stored profile, or the default one on first run
    async fn load_profile(&self) -> DomainResult<Profile>;

    /// Validate and apply an update. A password change is checked
    /// against the stored digest.
    async fn save_profile(&self, update: &ProfileUpdate) -> DomainResult<Profile>;

    async fn load_preferences(&self) -> DomainResult<Preferences>;

    async fn save_preferences(&self, preferences: &Preferences) -> DomainResult<()>;
}
