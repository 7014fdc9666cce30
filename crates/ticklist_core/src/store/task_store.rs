//! Task store contracts, SQLite implementation and in-memory test double.
//!
//! # Responsibility
//! - Serialize the task collection to a JSON array under one storage key.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` followed by `load` returns the same collection, order and
//!   fields preserved exactly.
//! - Corrupt persisted text degrades to the empty collection (logged,
//!   not surfaced).

use crate::db::DbError;
use crate::model::task::Task;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized task collection.
pub const TASKS_KEY: &str = "tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for persistence transport and serialization failures.
///
/// Deserialization failures never appear here: per contract they degrade
/// to the empty collection inside `load`.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for the task collection.
///
/// The store is the single source of truth: every registry mutation reloads
/// through `load`, applies its change and writes the whole collection back
/// through `save`.
pub trait TaskStore {
    /// Returns the persisted sequence, or the empty sequence when nothing
    /// is stored or the stored value fails to parse.
    fn load(&self) -> StoreResult<Vec<Task>>;

    /// Serializes and persists the entire collection, overwriting any prior
    /// value. Last writer wins.
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}

fn decode_collection(raw: Option<String>) -> Vec<Task> {
    let Some(text) = raw else {
        debug!("event=store_load module=store status=ok source=empty count=0");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<Task>>(&text) {
        Ok(tasks) => {
            debug!(
                "event=store_load module=store status=ok source=stored count={}",
                tasks.len()
            );
            tasks
        }
        Err(err) => {
            // Parse failure is "no data": degrade to a fresh empty list.
            warn!("event=store_load module=store status=parse_error error={err}");
            Vec::new()
        }
    }
}

fn encode_collection(tasks: &[Task]) -> StoreResult<String> {
    serde_json::to_string(tasks).map_err(StoreError::Serialize)
}

/// SQLite-backed task store over the `kv_store` table.
pub struct SqliteTaskStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskStore for SqliteTaskStore<'_> {
    fn load(&self) -> StoreResult<Vec<Task>> {
        let raw = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [TASKS_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(decode_collection(raw))
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let text = encode_collection(tasks)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![TASKS_KEY, text],
        )?;

        debug!(
            "event=store_save module=store status=ok count={}",
            tasks.len()
        );
        Ok(())
    }
}

/// In-memory task store holding the same JSON text a real backend would.
///
/// Keeps the serde codec on the test path, so wire-shape regressions show
/// up even without a database.
#[derive(Default)]
pub struct MemoryTaskStore {
    value: RefCell<Option<String>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw text, bypassing the codec. Used to exercise
    /// the corrupt-value path.
    pub fn with_raw(text: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(text.into())),
        }
    }

    /// Returns the stored text as-is.
    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        Ok(decode_collection(self.value.borrow().clone()))
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let text = encode_collection(tasks)?;
        *self.value.borrow_mut() = Some(text);
        Ok(())
    }
}
