//! Profile Repository
//!
//! SQLite-backed `ProfileStore`.

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::ProfileStore;
use crate::domain::{
    Allergy, DomainError, DomainResult, Preferences, Profile, ProfileUpdate,
};

fn db_err(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

fn not_ready() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}

pub struct SqliteProfileStore {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl SqliteProfileStore {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }
}

fn read_allergies(conn: &Connection) -> DomainResult<Vec<Allergy>> {
    let mut stmt = conn
        .prepare("SELECT id, name, selected FROM allergies ORDER BY position, id")
        .map_err(db_err)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Allergy {
                id: row.get(0)?,
                name: row.get(1)?,
                selected: row.get(2)?,
            })
        })
        .map_err(db_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn load_profile(&self) -> DomainResult<Profile> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        let profile = conn
            .query_row("SELECT name, email FROM profile WHERE id = 1", [], |row| {
                Ok(Profile {
                    name: row.get(0)?,
                    email: row.get(1)?,
                })
            })
            .optional()
            .map_err(db_err)?;
        Ok(profile.unwrap_or_default())
    }

    async fn save_profile(&self, update: &ProfileUpdate) -> DomainResult<Profile> {
        update.validate()?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        let stored: Option<String> = conn
            .query_row("SELECT password_digest FROM profile WHERE id = 1", [], |row| {
                row.get::<_, Option<String>>(0)
            })
            .optional()
            .map_err(db_err)?
            .flatten();
        let digest = update.next_password_digest(stored.as_deref())?;

        let profile = update.profile();
        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO profile (id, name, email, password_digest, updated_at)
             VALUES (1, ?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                email = excluded.email,
                password_digest = COALESCE(excluded.password_digest, profile.password_digest),
                updated_at = excluded.updated_at",
            params![profile.name, profile.email, digest, now],
        )
        .map_err(db_err)?;

        if digest.is_some() {
            log::info!("Password updated for {}", profile.email);
        }
        Ok(profile)
    }

    async fn load_preferences(&self) -> DomainResult<Preferences> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        let row = conn
            .query_row(
                "SELECT family_size, vegetarian, vegan FROM preferences WHERE id = 1",
                [],
                |row| Ok((row.get::<_, u32>(0)?, row.get::<_, bool>(1)?, row.get::<_, bool>(2)?)),
            )
            .optional()
            .map_err(db_err)?;

        let Some((family_size, vegetarian, vegan)) = row else {
            return Ok(Preferences::default());
        };
        Ok(Preferences {
            family_size,
            vegetarian,
            vegan,
            allergies: read_allergies(conn)?,
        })
    }

    async fn save_preferences(&self, preferences: &Preferences) -> DomainResult<()> {
        preferences.validate()?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        let tx = conn.unchecked_transaction().map_err(db_err)?;
        tx.execute(
            "INSERT INTO preferences (id, family_size, vegetarian, vegan) VALUES (1, ?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                family_size = excluded.family_size,
                vegetarian = excluded.vegetarian,
                vegan = excluded.vegan",
            params![preferences.family_size, preferences.vegetarian, preferences.vegan],
        )
        .map_err(db_err)?;
        tx.execute("DELETE FROM allergies", []).map_err(db_err)?;
        for (position, allergy) in preferences.allergies.iter().enumerate() {
            tx.execute(
                "INSERT INTO allergies (id, name, selected, position) VALUES (?, ?, ?, ?)",
                params![allergy.id, allergy.name, allergy.selected, position as i64],
            )
            .map_err(db_err)?;
        }
        tx.commit().map_err(db_err)
    }
}
