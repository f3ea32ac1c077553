pub const SCHEMA: &str = r#"
-- documents table
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY,
    source_url TEXT NOT NULL,
    content_hash TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_documents_content_hash ON documents(content_hash);

-- phrases table
CREATE TABLE IF NOT EXISTS phrases (
    id INTEGER PRIMARY KEY,
    author TEXT NOT NULL,
    phrase TEXT NOT NULL,
    phrase_hash TEXT NOT NULL UNIQUE,
    language TEXT NOT NULL,
    document_id INTEGER NOT NULL REFERENCES documents(id),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_phrases_language ON phrases(language);
"#;
