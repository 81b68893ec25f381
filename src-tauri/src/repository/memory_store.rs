//! In-memory `ProfileStore`, used when the database can't be opened.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::traits::ProfileStore;
use crate::domain::{DomainResult, Preferences, Profile, ProfileUpdate};

#[derive(Default)]
struct Inner {
    profile: Profile,
    password_digest: Option<String>,
    preferences: Preferences,
}

#[derive(Default)]
pub struct InMemoryProfileStore {
    inner: RwLock<Inner>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load_profile(&self) -> DomainResult<Profile> {
        Ok(self.inner.read().await.profile.clone())
    }

    async fn save_profile(&self, update: &ProfileUpdate) -> DomainResult<Profile> {
        update.validate()?;
        let mut inner = self.inner.write().await;
        if let Some(digest) = update.next_password_digest(inner.password_digest.as_deref())? {
            inner.password_digest = Some(digest);
        }
        inner.profile = update.profile();
        Ok(inner.profile.clone())
    }

    async fn load_preferences(&self) -> DomainResult<Preferences> {
        Ok(self.inner.read().await.preferences.clone())
    }

    async fn save_preferences(&self, preferences: &Preferences) -> DomainResult<()> {
        preferences.validate()?;
        self.inner.write().await.preferences = preferences.clone();
        Ok(())
    }
}
