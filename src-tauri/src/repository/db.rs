//! Database Connection and Setup
//!
//! Manages SQLite database connection and migrations.

use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::Preferences;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }
}

/// Open (or create) the database at `db_path` and run migrations.
/// `:memory:` opens a private in-memory database.
pub async fn init_db(db_path: &Path) -> Result<DbState, String> {
    let conn = if db_path.as_os_str() == ":memory:" {
        Connection::open_in_memory()
    } else {
        Connection::open(db_path)
    }
    .map_err(|e| format!("Failed to open db: {}", e))?;

    run_migrations(&conn)?;

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);
    Ok(state)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(mut rows) = stmt.query([]) else {
        return false;
    };
    while let Ok(Some(row)) = rows.next() {
        if let Ok(name) = row.get::<_, String>(1) {
            if name == column {
                return true;
            }
        }
    }
    false
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS profile (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            password_digest TEXT
        );
        CREATE TABLE IF NOT EXISTS preferences (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            family_size INTEGER NOT NULL,
            vegetarian INTEGER NOT NULL DEFAULT 0,
            vegan INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE IF NOT EXISTS allergies (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            selected INTEGER NOT NULL DEFAULT 0,
            position INTEGER NOT NULL DEFAULT 0
        );",
    )
    .map_err(|e| e.to_string())?;

    if !column_exists(conn, "profile", "updated_at") {
        conn.execute("ALTER TABLE profile ADD COLUMN updated_at INTEGER", [])
            .map_err(|e| format!("Failed to add updated_at: {}", e))?;
    }

    seed_defaults(conn)
}

/// First-run rows; existing rows are left alone
fn seed_defaults(conn: &Connection) -> Result<(), String> {
    let profile = crate::domain::Profile::default();
    conn.execute(
        "INSERT OR IGNORE INTO profile (id, name, email) VALUES (1, ?, ?)",
        params![profile.name, profile.email],
    )
    .map_err(|e| e.to_string())?;

    let prefs = Preferences::default();
    conn.execute(
        "INSERT OR IGNORE INTO preferences (id, family_size, vegetarian, vegan) VALUES (1, ?, ?, ?)",
        params![prefs.family_size, prefs.vegetarian, prefs.vegan],
    )
    .map_err(|e| e.to_string())?;

    let has_allergies: i64 = conn
        .query_row("SELECT COUNT(*) FROM allergies", [], |row| row.get(0))
        .map_err(|e| e.to_string())?;
    if has_allergies == 0 {
        for (position, allergy) in prefs.allergies.iter().enumerate() {
            conn.execute(
                "INSERT INTO allergies (id, name, selected, position) VALUES (?, ?, ?, ?)",
                params![allergy.id, allergy.name, allergy.selected, position as i64],
            )
            .map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}
