use rusqlite::{Connection, Result as SqlResult};

/// Create all tables for the version store.
pub fn create_tables(conn: &Connection) -> SqlResult<()> {
    conn.execute_batch(SCHEMA_SQL)
}

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS versions (
    version INTEGER PRIMARY KEY,
    version_date TEXT NOT NULL,
    selected_distance TEXT NOT NULL,
    device TEXT NOT NULL
);

-- At most one row: the version currently live on the device.
CREATE TABLE IF NOT EXISTS applied_version (
    version INTEGER PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS filters (
    version INTEGER NOT NULL,
    filter_index INTEGER NOT NULL,
    speaker TEXT NOT NULL,
    freq INTEGER NOT NULL,
    gain REAL NOT NULL,
    q REAL NOT NULL,
    PRIMARY KEY (version, filter_index, speaker)
);

-- Speaker rows as the console edits them (distance units intact).
CREATE TABLE IF NOT EXISTS speaker_settings (
    version INTEGER NOT NULL,
    speaker TEXT NOT NULL,
    crossover INTEGER,
    delay REAL NOT NULL,
    gain REAL NOT NULL,
    is_subwoofer INTEGER NOT NULL,
    distance_in_feet REAL,
    distance_in_meters REAL,
    PRIMARY KEY (version, speaker)
);

-- Speaker rows as the device needs them (distances resolved to ms).
CREATE TABLE IF NOT EXISTS speaker_delays (
    version INTEGER NOT NULL,
    speaker TEXT NOT NULL,
    crossover INTEGER,
    delay REAL NOT NULL,
    gain REAL NOT NULL,
    is_subwoofer INTEGER NOT NULL,
    PRIMARY KEY (version, speaker)
);
";
