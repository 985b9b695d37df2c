//! SQLite persistence of configuration versions.
//!
//! Every save creates a new auto-numbered version; nothing is overwritten
//! in place. Uses WAL mode and explicit transactions so a write interrupted
//! mid-save leaves the previous versions intact.

pub mod delays;
pub mod schema;

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Result as SqlResult};

use avproc_types::{
    ConfigPayload, DelayUnit, DeviceType, Filter, Speaker, Version, VersionId,
};

use delays::update_speaker_delays;

/// Open (or create) the store at `path` and ensure the schema exists.
pub fn open_store(path: &Path) -> SqlResult<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    schema::create_tables(&conn)?;
    Ok(conn)
}

/// Save a configuration as a new version. Distances are resolved to
/// device-facing millisecond delays here, once, under the payload's
/// selected unit. Returns the created version record.
pub fn save_config(conn: &Connection, payload: &ConfigPayload) -> SqlResult<Version> {
    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO versions (version_date, selected_distance, device)
         VALUES (datetime('now'), ?1, ?2)",
        params![
            payload.selected_distance.as_str(),
            payload.device.as_str()
        ],
    )?;
    let version = tx.last_insert_rowid();

    for (index, filter) in payload.filters.iter().enumerate() {
        tx.execute(
            "INSERT INTO filters (version, filter_index, speaker, freq, gain, q)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                version,
                index as i64,
                filter.speaker,
                filter.freq,
                filter.gain,
                filter.q
            ],
        )?;
    }

    for speaker in &payload.speakers {
        tx.execute(
            "INSERT INTO speaker_settings
                (version, speaker, crossover, delay, gain, is_subwoofer,
                 distance_in_feet, distance_in_meters)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                version,
                speaker.speaker,
                speaker.crossover,
                speaker.delay,
                speaker.gain,
                speaker.is_subwoofer as i32,
                speaker.distance_in_feet,
                speaker.distance_in_meters
            ],
        )?;
    }

    for speaker in update_speaker_delays(payload.selected_distance, &payload.speakers) {
        tx.execute(
            "INSERT INTO speaker_delays
                (version, speaker, crossover, delay, gain, is_subwoofer)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                version,
                speaker.speaker,
                speaker.crossover,
                speaker.delay,
                speaker.gain,
                speaker.is_subwoofer as i32
            ],
        )?;
    }

    let version_date: String = tx.query_row(
        "SELECT version_date FROM versions WHERE version = ?1",
        params![version],
        |row| row.get(0),
    )?;

    tx.commit()?;
    log::info!(target: "store", "saved configuration version {version}");

    Ok(Version {
        version: VersionId::new(version),
        version_date,
        applied_version: false,
    })
}

/// All saved versions in creation order, the applied flag derived from the
/// marker table.
pub fn list_versions(conn: &Connection) -> SqlResult<Vec<Version>> {
    let mut stmt = conn.prepare(
        "SELECT t1.version, t1.version_date, t2.version IS NOT NULL
         FROM versions t1
         LEFT JOIN applied_version t2 ON t1.version = t2.version
         ORDER BY t1.version",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Version {
            version: VersionId::new(row.get(0)?),
            version_date: row.get(1)?,
            applied_version: row.get(2)?,
        })
    })?;
    rows.collect()
}

/// The most recently saved version, if any.
pub fn latest_version(conn: &Connection) -> SqlResult<Option<VersionId>> {
    let id: Option<i64> = conn.query_row("SELECT max(version) FROM versions", [], |row| {
        row.get(0)
    })?;
    Ok(id.map(VersionId::new))
}

/// Read one version's configuration back in console form.
pub fn load_config(conn: &Connection, version: VersionId) -> SqlResult<ConfigPayload> {
    let (selected_distance, device): (String, String) = conn.query_row(
        "SELECT selected_distance, device FROM versions WHERE version = ?1",
        params![version.get()],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let mut stmt = conn.prepare(
        "SELECT speaker, freq, gain, q FROM filters
         WHERE version = ?1 ORDER BY filter_index",
    )?;
    let filters = stmt
        .query_map(params![version.get()], |row| {
            Ok(Filter {
                speaker: row.get(0)?,
                freq: row.get(1)?,
                gain: row.get(2)?,
                q: row.get(3)?,
            })
        })?
        .collect::<SqlResult<Vec<_>>>()?;

    let mut stmt = conn.prepare(
        "SELECT speaker, crossover, delay, gain, is_subwoofer,
                distance_in_feet, distance_in_meters
         FROM speaker_settings WHERE version = ?1 ORDER BY rowid",
    )?;
    let speakers = stmt
        .query_map(params![version.get()], |row| {
            Ok(Speaker {
                speaker: row.get(0)?,
                crossover: row.get(1)?,
                delay: row.get(2)?,
                gain: row.get(3)?,
                is_subwoofer: row.get::<_, i32>(4)? != 0,
                distance_in_feet: row.get(5)?,
                distance_in_meters: row.get(6)?,
            })
        })?
        .collect::<SqlResult<Vec<_>>>()?;

    Ok(ConfigPayload {
        speakers,
        filters,
        selected_distance: DelayUnit::from_name(&selected_distance).unwrap_or_default(),
        device: DeviceType::from_name(&device).unwrap_or_default(),
    })
}

/// The device-facing speaker rows for one version: millisecond delays,
/// no distance fields.
pub fn resolved_speakers(conn: &Connection, version: VersionId) -> SqlResult<Vec<Speaker>> {
    let mut stmt = conn.prepare(
        "SELECT speaker, crossover, delay, gain, is_subwoofer
         FROM speaker_delays WHERE version = ?1 ORDER BY rowid",
    )?;
    let rows = stmt.query_map(params![version.get()], |row| {
        Ok(Speaker {
            speaker: row.get(0)?,
            crossover: row.get(1)?,
            delay: row.get(2)?,
            gain: row.get(3)?,
            is_subwoofer: row.get::<_, i32>(4)? != 0,
            distance_in_feet: None,
            distance_in_meters: None,
        })
    })?;
    rows.collect()
}

/// Mark one version as live on the device. Exclusive: the marker table is
/// cleared first.
pub fn apply_config(conn: &Connection, version: VersionId) -> SqlResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM applied_version", [])?;
    tx.execute(
        "INSERT INTO applied_version (version) VALUES (?1)",
        params![version.get()],
    )?;
    tx.commit()?;
    log::info!(target: "store", "applied configuration version {version}");
    Ok(())
}

/// Remove a version and all of its rows. Deleting the applied version
/// clears the marker too.
pub fn delete_config(conn: &Connection, version: VersionId) -> SqlResult<()> {
    let tx = conn.unchecked_transaction()?;
    for table in [
        "versions",
        "filters",
        "speaker_settings",
        "speaker_delays",
        "applied_version",
    ] {
        tx.execute(
            &format!("DELETE FROM {table} WHERE version = ?1"),
            params![version.get()],
        )?;
    }
    tx.commit()?;
    log::info!(target: "store", "deleted configuration version {version}");
    Ok(())
}

/// The version whose configuration should be shown on startup: the applied
/// one, else the most recent.
pub fn startup_version(conn: &Connection) -> SqlResult<Option<VersionId>> {
    let applied: Option<i64> = conn
        .query_row("SELECT version FROM applied_version", [], |row| row.get(0))
        .optional()?;
    match applied {
        Some(id) => Ok(Some(VersionId::new(id))),
        None => latest_version(conn),
    }
}
