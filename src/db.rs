// ==========================================
// Substitute Scheduler - SQLite connection init
// ==========================================
// Goals:
// - unify PRAGMA behavior for every Connection::open
// - unify busy_timeout to reduce sporadic busy errors under concurrent writes
// - idempotent schema bootstrap (CREATE ... IF NOT EXISTS)
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMAs to a SQLite connection.
///
/// foreign_keys and busy_timeout are per-connection settings and must be
/// applied to every connection we open.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration applied.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the scheduling schema if it does not exist yet.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS teacher (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            knowledge_area TEXT NOT NULL,
            workload_hours INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS subject (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            knowledge_area TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS class_group (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS absence (
            id TEXT PRIMARY KEY,
            teacher_id TEXT NOT NULL,
            subject_id TEXT NOT NULL,
            class_group_id TEXT NOT NULL,
            weekday INTEGER NOT NULL,
            start_time TEXT NOT NULL,
            duration_hours INTEGER NOT NULL,
            week INTEGER NOT NULL,
            year INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS substitution (
            id TEXT PRIMARY KEY,
            absence_id TEXT NOT NULL,
            substitute_teacher_id TEXT,
            status TEXT NOT NULL DEFAULT 'pendente',
            message TEXT
        );

        -- weekly views and the assignment run query by (week, year)
        CREATE INDEX IF NOT EXISTS idx_absence_week ON absence(week, year);
        CREATE INDEX IF NOT EXISTS idx_substitution_absence ON substitution(absence_id);
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN \
                 ('teacher','subject','class_group','absence','substitution')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 5);
    }
}
