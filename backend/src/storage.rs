//! Sqlite persistence for upload summaries and login sessions.
//!
//! Connections are opened per handler against a single database file, which
//! matches how little data there is: at most `HISTORY_LIMIT` summary rows
//! exist at any time, pruned on every insert. The schema is bootstrapped at
//! startup, along with a default login when the users table is empty.

use std::collections::BTreeMap;

use common::model::history::HistoryEntry;
use common::model::summary::Summary;
use rusqlite::{params, Connection};

/// Database file created in the server's working directory.
pub const DB_PATH: &str = "equipview.sqlite";

/// Number of upload summaries retained.
pub const HISTORY_LIMIT: u32 = 5;

pub fn open() -> rusqlite::Result<Connection> {
    Connection::open(DB_PATH)
}

/// Creates the schema and seeds the default login, once, at startup.
pub fn init() -> rusqlite::Result<()> {
    let conn = open()?;
    bootstrap(&conn)
}

pub fn bootstrap(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS uploads (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             upload_date TEXT NOT NULL,
             filename TEXT NOT NULL,
             total_count INTEGER NOT NULL,
             avg_flowrate REAL NOT NULL,
             avg_pressure REAL NOT NULL,
             avg_temperature REAL NOT NULL,
             equipment_distribution TEXT
         );
         CREATE TABLE IF NOT EXISTS users (
             username TEXT PRIMARY KEY,
             password_md5 TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS sessions (
             token TEXT PRIMARY KEY,
             username TEXT NOT NULL,
             created_at TEXT NOT NULL
         );",
    )?;

    let users: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    if users == 0 {
        conn.execute(
            "INSERT INTO users (username, password_md5) VALUES (?1, ?2)",
            params!["admin", format!("{:x}", md5::compute(b"password123"))],
        )?;
    }
    Ok(())
}

/// Inserts one summary row and prunes everything older than the newest
/// `HISTORY_LIMIT` entries.
pub fn insert_summary(conn: &Connection, summary: &Summary) -> rusqlite::Result<()> {
    let distribution = match &summary.equipment_distribution {
        Some(counts) => serde_json::to_string(counts).ok(),
        None => None,
    };
    conn.execute(
        "INSERT INTO uploads
             (upload_date, filename, total_count, avg_flowrate, avg_pressure, avg_temperature, equipment_distribution)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            summary.upload_date,
            summary.filename,
            summary.total_count as i64,
            summary.avg_flowrate,
            summary.avg_pressure,
            summary.avg_temperature,
            distribution,
        ],
    )?;
    conn.execute(
        "DELETE FROM uploads WHERE id NOT IN
             (SELECT id FROM uploads ORDER BY id DESC LIMIT ?1)",
        params![HISTORY_LIMIT],
    )?;
    Ok(())
}

/// The retained summaries, newest first.
pub fn recent_summaries(conn: &Connection) -> rusqlite::Result<Vec<Summary>> {
    let mut stmt = conn.prepare(
        "SELECT upload_date, filename, total_count, avg_flowrate, avg_pressure, avg_temperature, equipment_distribution
         FROM uploads ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![HISTORY_LIMIT], |row| {
        let distribution: Option<String> = row.get(6)?;
        Ok(Summary {
            upload_date: row.get(0)?,
            filename: row.get(1)?,
            total_count: row.get::<_, i64>(2)? as u64,
            avg_flowrate: row.get(3)?,
            avg_pressure: row.get(4)?,
            avg_temperature: row.get(5)?,
            equipment_distribution: distribution
                .and_then(|raw| serde_json::from_str::<BTreeMap<String, u64>>(&raw).ok()),
        })
    })?;
    rows.collect()
}

/// The retained uploads as history rows, newest first.
pub fn recent_history(conn: &Connection) -> rusqlite::Result<Vec<HistoryEntry>> {
    let mut stmt = conn.prepare(
        "SELECT upload_date, filename, total_count, avg_flowrate
         FROM uploads ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![HISTORY_LIMIT], |row| {
        Ok(HistoryEntry {
            upload_date: row.get(0)?,
            filename: row.get(1)?,
            total_count: row.get::<_, i64>(2)? as u64,
            avg_flowrate: row.get(3)?,
        })
    })?;
    rows.collect()
}

pub fn clear_uploads(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM uploads", [])?;
    Ok(())
}

/// Password hash for `username`; `None` when the user does not exist.
pub fn password_md5(conn: &Connection, username: &str) -> rusqlite::Result<Option<String>> {
    match conn.query_row(
        "SELECT password_md5 FROM users WHERE username = ?1",
        params![username],
        |row| row.get(0),
    ) {
        Ok(hash) => Ok(Some(hash)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn store_session(
    conn: &Connection,
    token: &str,
    username: &str,
    created_at: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO sessions (token, username, created_at) VALUES (?1, ?2, ?3)",
        params![token, username, created_at],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = Connection::open(dir.path().join("test.sqlite")).unwrap();
        bootstrap(&conn).unwrap();
        (dir, conn)
    }

    fn summary(filename: &str, flow: f64) -> Summary {
        Summary {
            upload_date: "2026-08-05T09:00:00Z".into(),
            filename: filename.into(),
            total_count: 10,
            avg_flowrate: flow,
            avg_pressure: 2.0,
            avg_temperature: 40.0,
            equipment_distribution: Some(
                [("Pump".to_string(), 6u64), ("Valve".to_string(), 4u64)]
                    .into_iter()
                    .collect(),
            ),
        }
    }

    #[test]
    fn inserts_are_pruned_to_the_history_limit() {
        let (_dir, conn) = temp_db();
        for i in 0..8 {
            insert_summary(&conn, &summary(&format!("batch{}.csv", i), i as f64)).unwrap();
        }
        let history = recent_history(&conn).unwrap();
        assert_eq!(history.len(), HISTORY_LIMIT as usize);
        assert_eq!(history[0].filename, "batch7.csv");
        assert_eq!(history.last().unwrap().filename, "batch3.csv");
    }

    #[test]
    fn summaries_round_trip_with_distribution() {
        let (_dir, conn) = temp_db();
        let stored = summary("readings.csv", 12.5);
        insert_summary(&conn, &stored).unwrap();
        let loaded = recent_summaries(&conn).unwrap();
        assert_eq!(loaded, vec![stored]);
    }

    #[test]
    fn clear_removes_all_uploads() {
        let (_dir, conn) = temp_db();
        insert_summary(&conn, &summary("readings.csv", 1.0)).unwrap();
        clear_uploads(&conn).unwrap();
        assert!(recent_history(&conn).unwrap().is_empty());
    }

    #[test]
    fn default_login_is_seeded_once() {
        let (_dir, conn) = temp_db();
        bootstrap(&conn).unwrap();
        let users: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(users, 1);
        let hash = password_md5(&conn, "admin").unwrap().unwrap();
        assert_eq!(hash, format!("{:x}", md5::compute(b"password123")));
        assert_eq!(password_md5(&conn, "nobody").unwrap(), None);
    }

    #[test]
    fn sessions_are_stored_per_token() {
        let (_dir, conn) = temp_db();
        store_session(&conn, "tok-1", "admin", "2026-08-05T09:00:00Z").unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
