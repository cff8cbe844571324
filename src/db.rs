//! History query execution against the snapshot database.
//!
//! Consumes the on-disk schema Firefox writes to `places.sqlite`: a
//! `moz_places` relation (`id`, `url`, `title`, `description`) joined with
//! `moz_historyvisits` (`place_id`, `last_visit_date`). That schema is an
//! external contract owned by the browser and is never created or altered
//! here.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, params};
use tracing::{debug, warn};

use crate::errors::DbError;

// ---------------------------------------------------------------------------
// History query SQL
// ---------------------------------------------------------------------------

/// One pattern, three candidate fields. Lowercasing both sides makes the
/// `GLOB` match case-insensitive. Rows stream oldest visit first.
const HIST_QUERY: &str = "
SELECT DISTINCT url
FROM moz_places
JOIN moz_historyvisits ON moz_places.id = moz_historyvisits.place_id
WHERE LOWER(url) GLOB LOWER(?1)
   OR LOWER(title) GLOB LOWER(?1)
   OR LOWER(description) GLOB LOWER(?1)
ORDER BY last_visit_date ASC";

// ---------------------------------------------------------------------------
// Connection management
// ---------------------------------------------------------------------------

/// Open the snapshot read-only.
///
/// The process owns the copy exclusively, so no locking discipline is
/// needed; read-only flags just keep the query path honest. SQLite defers
/// reading the file header until first use, so a cheap pragma runs here to
/// surface "not a database" as an open error rather than a query error.
pub fn open_snapshot(path: &Path) -> Result<Connection, DbError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(|e| DbError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    conn.query_row("PRAGMA schema_version", [], |_| Ok(()))
        .map_err(|e| DbError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(conn)
}

// ---------------------------------------------------------------------------
// Query execution
// ---------------------------------------------------------------------------

/// Run the history query and feed each matching URL to `emit`, in ascending
/// last-visit order.
///
/// A row whose `url` fails to decode (NULL, blob, invalid UTF-8) is logged
/// and skipped; iteration continues. A terminal iteration error aborts with
/// [`DbError::RowIteration`] — URLs already emitted stand. Returns the
/// number of URLs emitted.
pub fn for_each_url<F>(conn: &Connection, pattern: &str, mut emit: F) -> Result<usize, DbError>
where
    F: FnMut(&str) -> std::io::Result<()>,
{
    let mut stmt = conn.prepare(HIST_QUERY).map_err(DbError::Query)?;
    let mut rows = stmt.query(params![pattern]).map_err(DbError::Query)?;

    let mut emitted = 0usize;
    loop {
        match rows.next() {
            Ok(Some(row)) => match row.get::<_, String>(0) {
                Ok(url) => {
                    emit(&url)?;
                    emitted += 1;
                }
                Err(e) => warn!(error = %e, "skipping row with undecodable url"),
            },
            Ok(None) => break,
            Err(e) => return Err(DbError::RowIteration(e)),
        }
    }

    debug!(pattern, emitted, "history query complete");
    Ok(emitted)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
