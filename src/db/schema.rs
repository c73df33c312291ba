//! Database schema and migrations for eduboard.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: members table
    r#"
-- Members table for registration and login
CREATE TABLE members (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    email       TEXT NOT NULL UNIQUE,
    name        TEXT NOT NULL,
    password    TEXT NOT NULL,           -- Argon2 hash
    role        TEXT NOT NULL DEFAULT 'user',  -- 'user', 'teacher', 'admin'
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_members_email ON members(email);
CREATE INDEX idx_members_name ON members(name);
"#,
    // v2: board table
    r#"
-- Board posts, keyed by an auto-incrementing bno
CREATE TABLE board (
    bno         INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    writer      TEXT NOT NULL,           -- free text, not a members FK
    regdate     TEXT NOT NULL DEFAULT (datetime('now')),
    moddate     TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
];
